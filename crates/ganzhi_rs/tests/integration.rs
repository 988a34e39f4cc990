//! Integration tests for the convenience layer.
//!
//! A fixed calendar stands in for real lunar conversion, so no tables or
//! network are needed.

use chrono::{NaiveDate, NaiveDateTime};
use ganzhi_rs::{
    ChartMethod, CycleContext, DaYunStatus, DaYunTimeline, EngineConfig, EngineError,
    EngineResult, FourPillars, Gender, GanzhiError, LunarCalendar, Pillar, RandomSource,
    ShiKeChart, Stem, chart_text, timeline_text,
};

/// Returns the same year/month/day pillars for any date, with the hour
/// pillar chosen by clock hour under a 甲 day.
struct FixedCalendar;

impl LunarCalendar for FixedCalendar {
    fn four_pillars(&self, at: NaiveDateTime) -> EngineResult<FourPillars> {
        use chrono::Timelike;
        let branch = clock_branch(at.hour());
        Ok(FourPillars {
            year: p("甲辰"),
            month: p("丁卯"),
            day: p("甲子"),
            // 甲 day: 子 hour is 甲子, each later hour steps one.
            hour: Pillar::from_ordinal(branch as i64),
        })
    }
}

struct BrokenCalendar;

impl LunarCalendar for BrokenCalendar {
    fn four_pillars(&self, at: NaiveDateTime) -> EngineResult<FourPillars> {
        Err(EngineError::Calendar(format!("no data for {at}")))
    }
}

/// Always draws the same number.
struct Constant(u32);

impl RandomSource for Constant {
    fn draw(&mut self, _low: u32, _high: u32) -> u32 {
        self.0
    }
}

fn clock_branch(hour: u32) -> u32 {
    (hour + 1) % 24 / 2
}

fn p(s: &str) -> Pillar {
    s.parse().unwrap()
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 20)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Chart casting
// ---------------------------------------------------------------------------

#[test]
fn custom_time_chart() {
    let cfg = EngineConfig::default();
    // 13:25 is 未 hour (辛未 under a 甲 day), third ke.
    let c = ShiKeChart::at_custom_time(&FixedCalendar, at(13, 25), &cfg).unwrap();
    assert_eq!(c.method(), ChartMethod::CustomTime);
    assert_eq!(c.hour().pillar.to_string(), "辛未");
    assert_eq!(c.state().ke.get(), 2);
    // 辛 hour starts ke at 戊; ke 2 is 庚寅.
    assert_eq!(c.ke().pillar.to_string(), "庚寅");
    let four = c.four_pillars().unwrap();
    assert_eq!(four.year.pillar.to_string(), "甲辰");
    assert_eq!(four.hour.pillar, c.hour().pillar);
}

#[test]
fn current_time_chart_uses_calendar() {
    let c = ShiKeChart::at_current_time(&FixedCalendar, &EngineConfig::default()).unwrap();
    assert_eq!(c.method(), ChartMethod::CurrentTime);
    assert!(c.moment().is_some());
    assert!(c.four_pillars().is_some());
}

#[test]
fn random_number_chart() {
    let cfg = EngineConfig::default();
    let c = ShiKeChart::from_random(&FixedCalendar, at(0, 30), &mut Constant(12), &cfg).unwrap();
    assert_eq!(c.method(), ChartMethod::RandomNumber);
    assert_eq!(c.number(), Some(12));
    assert_eq!(c.state().ke.get(), 11);
    assert_eq!(c.hour().pillar.to_string(), "甲子");
    assert_eq!(c.ke().pillar.to_string(), "乙亥");
}

#[test]
fn random_number_out_of_range() {
    let cfg = EngineConfig::default();
    for n in [0, 13] {
        let err = ShiKeChart::from_number(&FixedCalendar, at(9, 0), n, &cfg).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Ganzhi(GanzhiError::OutOfRange { .. })
        ));
    }
}

#[test]
fn seeded_rng_is_a_random_source() {
    use rand::SeedableRng;
    let cfg = EngineConfig::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let c = ShiKeChart::from_random(&FixedCalendar, at(9, 0), &mut rng, &cfg).unwrap();
    let n = c.number().unwrap();
    assert!((1..=12).contains(&n));
    assert_eq!(c.state().ke.get() as u32, n - 1);
}

#[test]
fn calendar_failure_propagates() {
    let err = ShiKeChart::at_custom_time(&BrokenCalendar, at(9, 0), &EngineConfig::default())
        .unwrap_err();
    assert!(matches!(err, EngineError::Calendar(_)));
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn navigation_keeps_method_and_four_pillars() {
    let cfg = EngineConfig::default();
    let c = ShiKeChart::at_custom_time(&FixedCalendar, at(13, 25), &cfg).unwrap();
    let mut n = c.clone();
    for _ in 0..12 {
        n = n.next().unwrap();
    }
    assert_eq!(n.method(), c.method());
    assert_eq!(n.four_pillars(), c.four_pillars());
    assert_eq!(n.state().ke, c.state().ke);
    assert_eq!(n.hour().pillar, c.hour().pillar.offset(1));
    let mut back = n;
    for _ in 0..12 {
        back = back.previous().unwrap();
    }
    assert_eq!(back, c);
}

#[test]
fn navigation_round_trip_every_state() {
    let cfg = EngineConfig::default();
    for hour in Pillar::all() {
        let c = ShiKeChart::from_ganzhi(hour, hour, &cfg).unwrap();
        // Derived states only: the user's ke pillar may differ from the derived one.
        let derived = c.next().unwrap().previous().unwrap();
        assert_eq!(derived.next().unwrap().previous().unwrap(), derived);
        assert_eq!(derived.previous().unwrap().next().unwrap(), derived);
        assert_eq!(derived.ke().pillar, derived.state().ke_pillar());
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

#[test]
fn timeline_reverse_for_female_yang_year() {
    let cfg = EngineConfig {
        dayun_count: 4,
        ..Default::default()
    };
    let ctx = CycleContext {
        birth_year: 1984,
        year_stem: Stem::Jia,
        gender: Gender::Female,
        first_dayun: p("丙寅"),
        start_age: 6,
    };
    let t = DaYunTimeline::build(ctx, &cfg).unwrap();
    let pillars: Vec<String> = t
        .blocks()
        .iter()
        .map(|b| b.decorated.pillar.to_string())
        .collect();
    assert_eq!(pillars, ["丙寅", "乙丑", "甲子", "癸亥"]);
    assert_eq!(t.blocks()[0].years[0].pillar.to_string(), "庚午");
    assert!(matches!(t.current(1989), DaYunStatus::PreCycle { .. }));

    let text = timeline_text(&t, &cfg, None);
    assert!(text.contains("方向：逆行"));
    assert!(text.contains("第4运 癸亥（大海水） 36-45岁\n"));
}

// ---------------------------------------------------------------------------
// Text and JSON output
// ---------------------------------------------------------------------------

#[test]
fn chart_text_includes_four_pillars() {
    let cfg = EngineConfig::default();
    let c = ShiKeChart::at_custom_time(&FixedCalendar, at(13, 25), &cfg).unwrap();
    let text = chart_text(&c, &cfg);
    assert!(text.contains("计算方法：自定义时间\n"));
    assert!(text.contains("时间：2024-03-20 13:25\n"));
    assert!(text.contains(
        "完整八字：年柱 甲辰（覆灯火） 月柱 丁卯（炉中火） 日柱 甲子（海中金） 时柱 辛未（路旁土）\n"
    ));
}

#[test]
fn chart_serializes_to_json() {
    let cfg = EngineConfig::default();
    let c = ShiKeChart::from_ganzhi_text("丁卯", "癸卯", &cfg).unwrap();
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["method"], "CustomGanzhi");
    assert_eq!(json["hour"]["pillar"], "丁卯");
    assert_eq!(json["ten_god"], "七杀");
    assert_eq!(json["ke_voided"], false);
    assert!(json.get("kinds").is_none());
}
