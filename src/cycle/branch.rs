//! The twelve earthly branches and the stems hidden inside them

use crate::cycle::element::Element;
use crate::cycle::stem::Stem;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    /// All branches in cycle order (index 0 = Zi)
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Branch at a cycle position; any integer is reduced modulo 12
    pub fn from_cycle(position: i64) -> Self {
        Self::ALL[position.rem_euclid(12) as usize]
    }

    /// Earth takes the four seasonal transitions, so the split is uneven
    pub fn element(&self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
        }
    }

    /// Stems contained in the branch, main qi first
    pub fn hidden_stems(&self) -> &'static [Stem] {
        match self {
            Branch::Zi => &[Stem::Gui],
            Branch::Chou => &[Stem::Ji, Stem::Geng, Stem::Xin],
            Branch::Yin => &[Stem::Jia, Stem::Bing, Stem::Wu],
            Branch::Mao => &[Stem::Yi],
            Branch::Chen => &[Stem::Ji, Stem::Ren, Stem::Gui],
            Branch::Si => &[Stem::Bing, Stem::Wu, Stem::Geng],
            Branch::Wu => &[Stem::Ding, Stem::Ji],
            Branch::Wei => &[Stem::Ji, Stem::Bing, Stem::Ding],
            Branch::Shen => &[Stem::Geng, Stem::Ren, Stem::Wu],
            Branch::You => &[Stem::Xin],
            Branch::Xu => &[Stem::Wu, Stem::Geng, Stem::Xin],
            Branch::Hai => &[Stem::Ren, Stem::Jia],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Branch::Zi => "Zi",
            Branch::Chou => "Chou",
            Branch::Yin => "Yin",
            Branch::Mao => "Mao",
            Branch::Chen => "Chen",
            Branch::Si => "Si",
            Branch::Wu => "Wu",
            Branch::Wei => "Wei",
            Branch::Shen => "Shen",
            Branch::You => "You",
            Branch::Xu => "Xu",
            Branch::Hai => "Hai",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
