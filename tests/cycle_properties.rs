//! Property tests for the sexagenary arithmetic

use bazi_verdict::analysis::compute_element_balance;
use bazi_verdict::chart::builder::{day_pillar, hour_pillar, month_pillar};
use bazi_verdict::chart::{build_chart, day_count, year_pillar};
use bazi_verdict::core::types::Gender;
use bazi_verdict::cycle::{Branch, Element, Relation, Stem};
use bazi_verdict::verdict::Verdict;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1600i32..2400, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn day_stem_repeats_every_ten_days(date in any_date()) {
        let later = date + Duration::days(10);
        prop_assert_eq!(day_pillar(date).stem, day_pillar(later).stem);
        prop_assert_ne!(day_pillar(date).stem, day_pillar(date + Duration::days(1)).stem);
    }

    #[test]
    fn day_branch_repeats_every_twelve_days(date in any_date()) {
        let later = date + Duration::days(12);
        prop_assert_eq!(day_pillar(date).branch, day_pillar(later).branch);
    }

    #[test]
    fn day_pillar_follows_day_count(date in any_date()) {
        let count = day_count(date);
        let pillar = day_pillar(date);
        prop_assert_eq!(pillar.stem.index() as i64, count.rem_euclid(10));
        prop_assert_eq!(pillar.branch.index() as i64, count.rem_euclid(12));
    }

    #[test]
    fn year_pillar_repeats_every_sixty_years(year in -3000i32..3000) {
        prop_assert_eq!(year_pillar(year), year_pillar(year + 60));
        // Stem and branch parity always agree
        let p = year_pillar(year);
        prop_assert_eq!(p.stem.index() % 2, p.branch.index() % 2);
    }

    #[test]
    fn hour_stem_steps_once_per_window(stem_idx in 0i64..10, hour in 0u32..22) {
        let stem = Stem::from_cycle(stem_idx);
        let here = hour_pillar(stem, hour).unwrap();
        let next = hour_pillar(stem, hour + 2).unwrap();
        prop_assert_eq!(next.stem.index(), (here.stem.index() + 1) % 10);
        if hour + 2 == 23 {
            prop_assert_eq!(next.branch, Branch::Zi);
        } else {
            prop_assert_eq!(next.branch.index(), here.branch.index() + 1);
        }

        let partner = hour ^ 1;
        prop_assert_eq!(hour_pillar(stem, partner).unwrap(), here);
    }

    #[test]
    fn month_pillar_stays_on_cycle(stem_idx in 0i64..10, month in 1u32..=12) {
        let p = month_pillar(Stem::from_cycle(stem_idx), month);
        prop_assert_eq!(p.stem.index() % 2, p.branch.index() % 2);
    }

    #[test]
    fn balance_always_sums_to_six(date in any_date(), hour in 0u32..24) {
        let chart = build_chart(Gender::Male, date, hour).unwrap();
        let balance = compute_element_balance(&chart);
        prop_assert!((balance.total() - 6.0).abs() < 1e-9);
        for (_, weight) in balance.iter() {
            prop_assert!(weight >= 0.0);
        }
    }

    #[test]
    fn verdict_is_monotone_in_score(a in -10i32..10, b in -10i32..10) {
        let rank = |v: Verdict| match v {
            Verdict::No => 0,
            Verdict::NotNow => 1,
            Verdict::Yes => 2,
        };
        if a <= b {
            prop_assert!(rank(Verdict::from_score(a)) <= rank(Verdict::from_score(b)));
        }
    }
}

#[test]
fn relations_are_inverse_pairs() {
    for a in Element::ALL {
        for b in Element::ALL {
            let inverse = match a.relation_to(b) {
                Relation::Same => Relation::Same,
                Relation::Generates => Relation::GeneratedBy,
                Relation::GeneratedBy => Relation::Generates,
                Relation::Conquers => Relation::ConqueredBy,
                Relation::ConqueredBy => Relation::Conquers,
            };
            assert_eq!(b.relation_to(a), inverse, "{a} -> {b}");
        }
    }
}

#[test]
fn generation_and_conquest_close_after_five_steps() {
    for e in Element::ALL {
        let mut g = e;
        let mut c = e;
        for _ in 0..5 {
            g = g.generates();
            c = c.conquers();
        }
        assert_eq!(g, e);
        assert_eq!(c, e);
        assert_eq!(e.generates().is_generated_by(), e);
        assert_eq!(e.conquers().is_conquered_by(), e);
    }
}
