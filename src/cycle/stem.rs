//! The ten heavenly stems

use crate::cycle::branch::Branch;
use crate::cycle::element::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    /// All stems in cycle order (index 0 = Jia)
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stem at a cycle position; any integer is reduced modulo 10
    pub fn from_cycle(position: i64) -> Self {
        Self::ALL[position.rem_euclid(10) as usize]
    }

    /// Two stems per element, in generation order
    pub fn element(&self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    /// The stem's prosperity ("Lu") branch
    pub fn prosperity_branch(&self) -> Branch {
        match self {
            Stem::Jia => Branch::Yin,
            Stem::Yi => Branch::Mao,
            Stem::Bing => Branch::Si,
            Stem::Ding => Branch::Wu,
            Stem::Wu => Branch::Chen,
            Stem::Ji => Branch::Xu,
            Stem::Geng => Branch::Shen,
            Stem::Xin => Branch::You,
            Stem::Ren => Branch::Hai,
            Stem::Gui => Branch::Zi,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stem::Jia => "Jia",
            Stem::Yi => "Yi",
            Stem::Bing => "Bing",
            Stem::Ding => "Ding",
            Stem::Wu => "Wu",
            Stem::Ji => "Ji",
            Stem::Geng => "Geng",
            Stem::Xin => "Xin",
            Stem::Ren => "Ren",
            Stem::Gui => "Gui",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
