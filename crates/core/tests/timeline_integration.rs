//! Timeline and duration behaviour over whole employment histories

mod support;

use chrono::{Duration, Months};
use hrms_common::testing::ymd;
use hrms_core::timeline::{summarize_service, TimelineCategory};
use hrms_core::{
    build_timeline, calculate_detailed_duration, calculate_total_in_service_duration, inclusive_days,
    total_days_in_service, ElapsedDuration, NoMasterData,
};
use hrms_domain::{format_display_date, DateValue, Employee, EmploymentBlock, EmploymentStatus, Leave};
use support::{current_posting, date, past_posting, status_event, today, MockMasterData};

#[test]
fn detailed_duration_reconstructs_the_inclusive_end() {
    let starts = [ymd(1999, 3, 28), ymd(2004, 2, 28), ymd(2010, 11, 20), ymd(2015, 6, 15), ymd(2019, 12, 1)];
    let lengths = [0_i64, 1, 27, 28, 30, 59, 365, 366, 1000, 4017];

    for start in starts {
        for length in lengths {
            let end = start + Duration::days(length);
            let ElapsedDuration::Span(span) =
                calculate_detailed_duration(&DateValue::Concrete(start), &DateValue::Concrete(end), today())
            else {
                panic!("expected a span for {start} .. {end}");
            };

            assert!(span.years >= 0 && span.months >= 0 && span.days >= 0, "{start} .. {end}: {span:?}");
            assert!(span.months < 12, "{start} .. {end}: {span:?}");

            let whole_months = u32::try_from(span.years * 12 + span.months).unwrap();
            let rebuilt = start.checked_add_months(Months::new(whole_months)).unwrap() + Duration::days(span.days);
            assert_eq!(rebuilt, end.succ_opt().unwrap(), "{start} .. {end}: {span:?}");
        }
    }
}

#[test]
fn reversed_intervals_are_always_zero_days() {
    let start = ymd(2020, 6, 15);
    for back in [1, 2, 31, 400] {
        let end = start - Duration::days(back);
        let result = calculate_detailed_duration(&DateValue::Concrete(start), &DateValue::Concrete(end), today());
        assert_eq!(result.to_string(), "0 Days");
    }
}

#[test]
fn unset_sentinels_display_as_not_available() {
    assert_eq!(format_display_date(&DateValue::parse("0000-00-00")), "N/A");
    assert_eq!(format_display_date(&DateValue::parse("")), "N/A");
    assert_eq!(format_display_date(&DateValue::from_option(None)), "N/A");
}

#[test]
fn empty_history_totals_zero_days() {
    assert_eq!(calculate_total_in_service_duration(&[], today()).to_string(), "0 Days");

    let summary = summarize_service(&[], &NoMasterData, today());
    assert!(summary.entries.is_empty());
    assert_eq!(summary.empty_message, Some("No employment history"));
    assert_eq!(summary.total_in_service.to_string(), "0 Days");
}

#[test]
fn total_sums_each_interval_instead_of_the_envelope() {
    let history = vec![past_posting("A", "2000-01-01", "2001-01-01"), current_posting("B", "2005-01-01")];
    let now = ymd(2010, 1, 1);

    let expected = inclusive_days(ymd(2000, 1, 1), ymd(2001, 1, 1)) + inclusive_days(ymd(2005, 1, 1), now);
    assert_eq!(total_days_in_service(&history, now), expected);
    assert!(expected < inclusive_days(ymd(2000, 1, 1), now));
    assert_eq!(calculate_total_in_service_duration(&history, now).to_string(), "6 Years, 3 Days");
}

#[test]
fn display_order_is_current_terminal_then_exit() {
    // nothing starts after the resignation, so it stays unresolved
    let mut exit = status_event("A", EmploymentStatus::Resigned, "2021-01-01");
    exit.leaves.push(Leave {
        leave_type: "Earned".into(),
        from_date: date("2018-01-01"),
        to_date: date("2018-01-05"),
        days: None,
        remarks: None,
    });
    let history = vec![
        exit,
        current_posting("B", "2020-01-01"),
        status_event("C", EmploymentStatus::Retired, "2023-01-01"),
    ];

    let timeline = build_timeline(&history, &NoMasterData, today());
    let ids: Vec<&str> = timeline.iter().map(|entry| entry.block_id).collect();
    assert_eq!(ids, ["B", "C", "A"]);

    let categories: Vec<TimelineCategory> = timeline.iter().map(|entry| entry.category).collect();
    assert_eq!(
        categories,
        [TimelineCategory::Current, TimelineCategory::Terminal, TimelineCategory::UnresolvedExit]
    );

    assert!(timeline[0].is_active);
    assert!(timeline[1..].iter().all(|entry| !entry.is_active));

    // entries point at the stored blocks; sub-lists are not copied
    assert!(std::ptr::eq(timeline[2].block, &history[0]));
    assert_eq!(timeline[2].leaves.rows.len(), 1);
    assert_eq!(timeline[2].leaves.total_days, 5);
}

#[test]
fn resignation_followed_by_posting_is_a_resolved_rejoin() {
    let history =
        vec![status_event("exit", EmploymentStatus::Resigned, "2010-05-01"), current_posting("back", "2012-01-01")];

    let timeline = build_timeline(&history, &NoMasterData, today());
    let exit = timeline.iter().find(|entry| entry.block_id == "exit").unwrap();

    assert!(exit.classification.is_exit_status);
    assert!(exit.classification.is_rejoin_case);
    assert_eq!(exit.category, TimelineCategory::Other);
    assert_eq!(exit.classification.label, "01/05/2010 \u{2014} 01/05/2010");
    assert_eq!(exit.classification.elapsed.to_string(), "1 Day");
    assert_eq!(timeline[0].block_id, "back");
}

#[test]
fn rejoin_is_found_even_when_storage_is_out_of_order() {
    let history =
        vec![current_posting("back", "2012-01-01"), status_event("exit", EmploymentStatus::Resigned, "2010-05-01")];

    let timeline = build_timeline(&history, &NoMasterData, today());
    let exit = timeline.iter().find(|entry| entry.block_id == "exit").unwrap();
    assert!(exit.classification.is_rejoin_case);
}

#[test]
fn single_current_posting_end_to_end() {
    let history = vec![current_posting("only", "2015-06-15")];
    let timeline = build_timeline(&history, &NoMasterData, today());

    assert_eq!(timeline.len(), 1);
    let entry = &timeline[0];
    assert!(entry.is_active);
    assert_eq!(entry.classification.label, "15/06/2015 \u{2014} Present");
    assert_eq!(entry.classification.elapsed.to_string(), "9 Years");
    assert_eq!(entry.leaves.empty_message, Some("No leave records"));
    assert_eq!(entry.disciplinary.empty_message, Some("No disciplinary actions"));
}

#[test]
fn retirement_end_to_end() {
    let history = vec![status_event("ret", EmploymentStatus::Retired, "2020-03-10")];
    let timeline = build_timeline(&history, &NoMasterData, today());

    let entry = &timeline[0];
    assert_eq!(entry.category, TimelineCategory::Terminal);
    assert_eq!(entry.classification.label, "Retired on 10/03/2020");
    let span = entry.classification.elapsed.span().unwrap();
    assert!(span.years >= 0 && span.months >= 0 && span.days >= 0);

    let expected = calculate_detailed_duration(&date("2020-03-10"), &DateValue::OpenEnded, today());
    assert_eq!(entry.classification.elapsed, expected);
}

#[test]
fn master_data_names_fall_back_to_raw_ids() {
    let mut posting = current_posting("p", "2015-06-15");
    posting.designation_id = Some("des-1".into());
    posting.unit_id = Some("unit-404".into());
    posting.tehsil_id = Some("teh-1".into());
    let history = vec![posting];

    let lookup = MockMasterData::default().with_designation("des-1", "Civil Judge").with_tehsil("teh-1", "Kharian");
    let timeline = build_timeline(&history, &lookup, today());

    assert_eq!(timeline[0].designation.as_deref(), Some("Civil Judge"));
    assert_eq!(timeline[0].unit.as_deref(), Some("unit-404"));
    assert_eq!(timeline[0].tehsil.as_deref(), Some("Kharian"));
}

#[test]
fn malformed_block_does_not_hide_the_rest() {
    let broken = EmploymentBlock::new("broken", EmploymentStatus::InService)
        .with_from_date(date("15th of June"))
        .with_to_date(date("2016-01-01"));
    let history = vec![broken, current_posting("ok", "2016-01-02")];

    let summary = summarize_service(&history, &NoMasterData, today());
    assert_eq!(summary.entries.len(), 2);
    assert_eq!(summary.current_posting_id, Some("ok"));

    let broken = summary.entries.iter().find(|entry| entry.block_id == "broken").unwrap();
    assert_eq!(broken.classification.elapsed, ElapsedDuration::InvalidDate);
    assert_eq!(broken.classification.label, "15th of June \u{2014} 01/01/2016");
}

#[test]
fn unknown_status_does_not_hide_the_rest() {
    let employee: Employee = serde_json::from_value(serde_json::json!({
        "id": "EMP-0100",
        "fullName": "Sana Malik",
        "employmentHistory": [
            { "id": "b1", "status": "In-Service", "fromDate": "2005-03-01", "toDate": "2009-12-31" },
            { "id": "t", "status": "Transferred", "fromDate": "2010-01-01", "toDate": "2011-12-31" },
            { "id": "b3", "status": "In-Service", "fromDate": "2012-01-01", "isCurrentlyWorking": true }
        ]
    }))
    .unwrap();

    let summary = summarize_service(&employee.employment_history, &NoMasterData, today());
    let ids: Vec<&str> = summary.entries.iter().map(|entry| entry.block_id).collect();
    assert_eq!(ids, ["b3", "b1", "t"]);

    let transferred = &summary.entries[2];
    assert_eq!(transferred.category, TimelineCategory::Other);
    assert_eq!(transferred.badge.label, "Transferred");
    assert_eq!(transferred.classification.label, "01/01/2010 \u{2014} 31/12/2011");

    // only the two in-service blocks count towards the total
    let in_service_only = vec![employee.employment_history[0].clone(), employee.employment_history[2].clone()];
    assert_eq!(summary.total_days, total_days_in_service(&in_service_only, today()));
}

#[test]
fn display_order_never_changes_the_total() {
    let history = vec![
        status_event("r", EmploymentStatus::Retired, "2023-01-01"),
        past_posting("a", "2001-02-03", "2009-09-09"),
        current_posting("b", "2010-01-01"),
    ];
    let mut reversed = history.clone();
    reversed.reverse();

    assert_eq!(
        summarize_service(&history, &NoMasterData, today()).total_days,
        summarize_service(&reversed, &NoMasterData, today()).total_days
    );
    assert_eq!(
        total_days_in_service(&history, today()),
        inclusive_days(ymd(2001, 2, 3), ymd(2009, 9, 9)) + inclusive_days(ymd(2010, 1, 1), today())
    );
}
