//! Integration tests for the verdict engine
//!
//! Each score below is worked by hand from the year pillar, the day
//! master and the chart's prosperity/strength, so the thresholds are hit
//! exactly rather than approximately.

use bazi_verdict::analysis::{ProsperityStatus, StrengthCategory};
use bazi_verdict::chart::{build_chart, Chart, Pillar};
use bazi_verdict::core::types::{ByPosition, Gender};
use bazi_verdict::cycle::{Branch, Element, Stem};
use bazi_verdict::verdict::{determine_verdict, ScoreBreakdown, Verdict, YearEnergy};
use chrono::NaiveDate;

/// 1990-01-01 08:00: Bing Fire day master, average strength, Si absent
fn reference_chart() -> Chart {
    build_chart(Gender::Male, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(), 8).unwrap()
}

fn chart(pairs: [(Stem, Branch); 4]) -> Chart {
    let [year, month, day, hour] = pairs.map(|(s, b)| Pillar::new(s, b));
    Chart::new(
        Gender::Female,
        NaiveDate::from_ymd_opt(2000, 6, 1).unwrap(),
        12,
        ByPosition { year, month, day, hour },
    )
}

#[test]
fn test_reference_chart_across_years() {
    let chart = reference_chart();

    // Ding Mao: Fire stem +2, Wood branch +1
    let a = determine_verdict(&chart, 1987).unwrap();
    assert_eq!(a.compatibility_score, 3);
    assert_eq!(a.verdict, Verdict::Yes);

    // Jia Yin: Wood feeds Fire twice
    let a = determine_verdict(&chart, 2034).unwrap();
    assert_eq!(a.compatibility_score, 2);
    assert_eq!(a.verdict, Verdict::NotNow);

    // Ren Shen: Water attacks Fire, Metal is neutral
    let a = determine_verdict(&chart, 1992).unwrap();
    assert_eq!(a.compatibility_score, -1);
    assert_eq!(a.verdict, Verdict::NotNow);

    // Ren Zi: Water on both sides
    let a = determine_verdict(&chart, 2032).unwrap();
    assert_eq!(a.compatibility_score, -2);
    assert_eq!(a.verdict, Verdict::No);

    // Bing Wu: Fire on both sides
    let a = determine_verdict(&chart, 2026).unwrap();
    assert_eq!(a.compatibility_score, 4);
    assert_eq!(a.verdict, Verdict::Yes);
}

#[test]
fn test_average_strength_never_amplifies() {
    let chart = reference_chart();
    for year in 1980..2040 {
        let a = determine_verdict(&chart, year).unwrap();
        assert_eq!(a.day_master_strength, StrengthCategory::Average);
        assert_eq!(a.breakdown.amplifier, 0, "year {year}");
        assert_eq!(a.verdict, Verdict::from_score(a.compatibility_score));
    }
}

#[test]
fn test_weak_day_master_tips_into_no() {
    // Month branch Shen is Metal and only the day stem is Fire: 0.5
    let chart = chart([
        (Stem::Geng, Branch::Shen),
        (Stem::Wu, Branch::Shen),
        (Stem::Bing, Branch::Zi),
        (Stem::Geng, Branch::Chen),
    ]);

    let a = determine_verdict(&chart, 1992).unwrap();
    assert_eq!(a.day_master_strength, StrengthCategory::Weak);
    assert_eq!(a.prosperity_status, ProsperityStatus::Absent);
    assert_eq!(a.breakdown.stem, -1);
    assert_eq!(a.breakdown.branch, 0);
    assert_eq!(a.breakdown.amplifier, -1);
    assert_eq!(a.compatibility_score, -2);
    assert_eq!(a.verdict, Verdict::No);
}

#[test]
fn test_strong_day_master_tips_into_yes() {
    // Wu month is Fire (+3) and two Fire stems (+1): 4.0
    let chart = chart([
        (Stem::Geng, Branch::Chen),
        (Stem::Ding, Branch::Wu),
        (Stem::Bing, Branch::Xu),
        (Stem::Jia, Branch::Zi),
    ]);

    let a = determine_verdict(&chart, 2034).unwrap();
    assert_eq!(a.day_master_strength, StrengthCategory::Strong);
    assert_eq!(a.breakdown.stem + a.breakdown.branch, 2);
    assert_eq!(a.breakdown.amplifier, 1);
    assert_eq!(a.compatibility_score, 3);
    assert_eq!(a.verdict, Verdict::Yes);
}

#[test]
fn test_strong_prosperity_offsets_hostile_year() {
    // Jia's Lu is Yin, seated in the month pillar
    let chart = chart([
        (Stem::Geng, Branch::Shen),
        (Stem::Wu, Branch::Yin),
        (Stem::Jia, Branch::Chen),
        (Stem::Xin, Branch::You),
    ]);

    // Geng Xu: Metal attacks Wood, Earth is neutral
    let a = determine_verdict(&chart, 2030).unwrap();
    assert_eq!(a.prosperity_status, ProsperityStatus::Strong);
    assert_eq!(a.day_master_strength, StrengthCategory::Average);
    assert_eq!(a.breakdown.stem, -1);
    assert_eq!(a.breakdown.prosperity, 2);
    assert_eq!(a.compatibility_score, 1);
    assert_eq!(a.verdict, Verdict::NotNow);
}

#[test]
fn test_weak_prosperity_earns_nothing() {
    // Yin only in the year pillar; month Shen gives Wood no support
    let chart = chart([
        (Stem::Bing, Branch::Yin),
        (Stem::Geng, Branch::Shen),
        (Stem::Jia, Branch::Chen),
        (Stem::Ren, Branch::Shen),
    ]);

    let a = determine_verdict(&chart, 2030).unwrap();
    assert_eq!(a.prosperity_status, ProsperityStatus::Weak);
    assert_eq!(a.day_master_strength, StrengthCategory::Weak);
    assert_eq!(a.breakdown.prosperity, 0);
    assert_eq!(a.breakdown.amplifier, -1);
    assert_eq!(a.compatibility_score, -2);
    assert_eq!(a.verdict, Verdict::No);
}

#[test]
fn test_breakdown_totals_at_thresholds() {
    let energy = |year| YearEnergy::for_year(year);

    let cases = [
        (Element::Fire, 1987, ProsperityStatus::Absent, StrengthCategory::Average, 3, Verdict::Yes),
        (Element::Fire, 2034, ProsperityStatus::Absent, StrengthCategory::Average, 2, Verdict::NotNow),
        (Element::Fire, 1992, ProsperityStatus::Absent, StrengthCategory::Average, -1, Verdict::NotNow),
        (Element::Fire, 2032, ProsperityStatus::Absent, StrengthCategory::Average, -2, Verdict::No),
        (Element::Fire, 2034, ProsperityStatus::Present, StrengthCategory::Average, 3, Verdict::Yes),
        (Element::Fire, 2032, ProsperityStatus::Strong, StrengthCategory::Weak, 0, Verdict::NotNow),
    ];

    for (dm, year, prosperity, strength, total, verdict) in cases {
        let b = ScoreBreakdown::compute(dm, &energy(year), prosperity, strength);
        assert_eq!(b.total, total, "{dm} in {year}");
        assert_eq!(b.total, b.stem + b.branch + b.prosperity + b.amplifier);
        assert_eq!(b.verdict(), verdict, "{dm} in {year}");
    }
}

#[test]
fn test_analysis_json_shape() {
    let a = determine_verdict(&reference_chart(), 2026).unwrap();
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["verdict"], "YES");
    assert_eq!(json["compatibilityScore"], 4);
    assert_eq!(json["yearEnergy"]["stem"], "Bing");
    assert_eq!(json["yearEnergy"]["branchElement"], "Fire");
    assert_eq!(json["dayMasterStrength"], "average");
    assert_eq!(json["prosperityStatus"], "absent");
    assert_eq!(json["structure"], "Generating Earth");
}
