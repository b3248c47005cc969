use chrono::{DateTime, TimeDelta, Utc};
use libris::{BorrowRecord, Dashboard, LibrisError, RecordId, Stat, User};
use proptest::prelude::*;

fn t(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn rec(date: &str, language: &str, publisher: &str) -> BorrowRecord {
    BorrowRecord {
        language: Some(language.to_string()),
        publishing_house: Some(publisher.to_string()),
        borrow_date: date.to_string(),
        ..Default::default()
    }
}

fn member(id: &str, name: &str, history: Vec<BorrowRecord>) -> User {
    User {
        id: RecordId::from(id),
        name: name.to_string(),
        history,
        ..Default::default()
    }
}

fn dashboard(users: Vec<User>, now: DateTime<Utc>) -> Dashboard {
    Dashboard::builder().users(users).now(now).build().unwrap()
}

#[test]
fn empty_fleet() {
    let dash = dashboard(vec![], t("2024-01-05T12:00:00Z"));
    assert_eq!(
        dash.chart_dates(),
        &["Sat Dec 30", "Sun Dec 31", "Mon Jan 1", "Tue Jan 2", "Wed Jan 3", "Thu Jan 4", "Fri Jan 5"]
    );
    assert_eq!(dash.chart_borrow_counts(), &[0; 7]);
    assert!(dash.top_borrowers().is_empty());
    assert!(dash.top_languages().is_empty());
    assert!(dash.top_publishers().is_empty());
    assert_eq!(dash.total_members(), 0);
    assert_eq!(dash.borrowed_last_week(), 0);
}

#[test]
fn single_borrow_today() {
    let now = t("2024-01-05T12:00:00Z");
    let dash = dashboard(
        vec![member("u1", "Ada", vec![rec("2024-01-05T08:15:00Z", "English", "Acme")])],
        now,
    );
    assert_eq!(dash.chart_borrow_counts(), &[0, 0, 0, 0, 0, 0, 1]);
    let top = dash.top_borrowers();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, RecordId::from("u1"));
    assert_eq!(top[0].count, 1);
    assert_eq!(top[0].name, "Ada");
    assert_eq!(dash.top_languages()[0].language, "English");
    assert_eq!(dash.top_languages()[0].count, 1);
    assert_eq!(dash.top_publishers()[0].name, "Acme");
    assert_eq!(dash.total_members(), 1);
    assert_eq!(dash.borrowed_last_week(), 1);
}

#[test]
fn malformed_date_counts_everywhere_but_time_windows() {
    let dash = dashboard(
        vec![member("u1", "Ada", vec![rec("not-a-date", "French", "Gallimard")])],
        t("2024-01-05T12:00:00Z"),
    );
    assert_eq!(dash.chart_borrow_counts().iter().sum::<usize>(), 0);
    assert_eq!(dash.borrowed_last_week(), 0);
    assert_eq!(dash.top_borrowers()[0].count, 1);
    assert_eq!(dash.top_languages()[0].language, "French");
    assert_eq!(dash.top_publishers()[0].name, "Gallimard");
}

#[test]
fn tied_languages_keep_both() {
    let today = "2024-01-05T09:00:00Z";
    let dash = dashboard(
        vec![
            member("u1", "Ada", vec![rec(today, "English", "Acme"), rec(today, "English", "Acme")]),
            member("u2", "Grace", vec![rec(today, "French", "Acme"), rec(today, "French", "Acme")]),
        ],
        t("2024-01-05T12:00:00Z"),
    );
    let langs = dash.top_languages();
    assert_eq!(langs.len(), 2);
    assert!(langs.iter().all(|l| l.count == 2));
    let mut names: Vec<_> = langs.iter().map(|l| l.language.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["English", "French"]);
}

#[test]
fn statistics_are_lazy_and_independent() {
    let dash = dashboard(
        vec![member("u1", "Ada", vec![rec("2024-01-05T08:00:00Z", "English", "Acme")])],
        t("2024-01-05T12:00:00Z"),
    );
    assert!(!dash.is_cached(Stat::TopLanguages));
    let _ = dash.top_languages();
    assert!(dash.is_cached(Stat::TopLanguages));
    for other in [
        Stat::ChartDates,
        Stat::ChartBorrowCounts,
        Stat::TopBorrowers,
        Stat::TopPublishers,
        Stat::BorrowedLastWeek,
    ] {
        assert!(!dash.is_cached(other), "{other:?} computed eagerly");
    }
}

#[test]
fn repeated_reads_return_the_same_value() {
    let dash = dashboard(
        vec![member("u1", "Ada", vec![rec("2024-01-04T08:00:00Z", "English", "Acme")])],
        t("2024-01-05T12:00:00Z"),
    );
    let first = dash.report();
    let again = dash.report();
    assert_eq!(first, again);
    assert!(std::ptr::eq(dash.top_borrowers(), dash.top_borrowers()));
}

#[test]
fn replacing_members_forgets_member_statistics() {
    let now = t("2024-01-05T12:00:00Z");
    let mut dash = dashboard(
        vec![member("u1", "Ada", vec![rec("2024-01-05T08:00:00Z", "English", "Acme")])],
        now,
    );
    let _ = dash.report();
    dash.set_users(vec![
        member("u1", "Ada", vec![]),
        member("u2", "Grace", vec![rec("2024-01-03T08:00:00Z", "German", "Suhrkamp")]),
    ]);
    assert!(dash.is_cached(Stat::ChartDates));
    assert!(!dash.is_cached(Stat::ChartBorrowCounts));
    assert!(!dash.is_cached(Stat::TopBorrowers));
    assert!(!dash.is_cached(Stat::TopLanguages));
    assert!(!dash.is_cached(Stat::TopPublishers));
    assert!(!dash.is_cached(Stat::BorrowedLastWeek));

    assert_eq!(dash.chart_borrow_counts(), &[0, 0, 0, 0, 1, 0, 0]);
    assert_eq!(dash.top_borrowers()[0].name, "Grace");
    assert_eq!(dash.top_borrowers().len(), 1);
    assert_eq!(dash.top_languages()[0].language, "German");
    assert_eq!(dash.total_members(), 2);
}

#[test]
fn replacing_books_forgets_nothing() {
    let mut dash = dashboard(
        vec![member("u1", "Ada", vec![rec("2024-01-05T08:00:00Z", "English", "Acme")])],
        t("2024-01-05T12:00:00Z"),
    );
    let _ = dash.report();
    dash.set_books(vec![libris::Book {
        id: RecordId::from("b1"),
        status: true,
        ..Default::default()
    }]);
    assert_eq!(dash.books().len(), 1);
    for stat in [
        Stat::ChartDates,
        Stat::ChartBorrowCounts,
        Stat::TopBorrowers,
        Stat::TopLanguages,
        Stat::TopPublishers,
        Stat::BorrowedLastWeek,
    ] {
        assert!(dash.is_cached(stat), "{stat:?} was forgotten");
    }
}

#[test]
fn moving_the_clock_shifts_time_windows_only() {
    let mut dash = dashboard(
        vec![member("u1", "Ada", vec![rec("2024-01-05T08:00:00Z", "English", "Acme")])],
        t("2024-01-05T12:00:00Z"),
    );
    let _ = dash.report();

    dash.set_now(t("2024-01-05T12:00:00Z"));
    assert!(dash.is_cached(Stat::ChartBorrowCounts));

    dash.set_now(t("2024-01-07T12:00:00Z"));
    assert!(!dash.is_cached(Stat::ChartDates));
    assert!(!dash.is_cached(Stat::ChartBorrowCounts));
    assert!(!dash.is_cached(Stat::BorrowedLastWeek));
    assert!(dash.is_cached(Stat::TopBorrowers));
    assert!(dash.is_cached(Stat::TopLanguages));
    assert!(dash.is_cached(Stat::TopPublishers));

    assert_eq!(dash.chart_dates().last().map(String::as_str), Some("Sun Jan 7"));
    assert_eq!(dash.chart_borrow_counts(), &[0, 0, 0, 0, 1, 0, 0]);

    dash.set_now(t("2024-01-20T12:00:00Z"));
    assert_eq!(dash.borrowed_last_week(), 0);
    assert_eq!(dash.chart_borrow_counts(), &[0; 7]);
}

#[test]
fn user_name_falls_back_to_id() {
    let dash = dashboard(vec![member("7", "Ada", vec![])], t("2024-01-05T12:00:00Z"));
    assert_eq!(dash.user_name(&RecordId::from(7u64)), "Ada");
    assert_eq!(dash.user_name(&RecordId::from("8")), "User 8");
}

#[test]
fn custom_limits_and_chart_length() {
    let today = "2024-01-05T09:00:00Z";
    let users: Vec<User> = (0..6)
        .map(|i| {
            member(
                &i.to_string(),
                &format!("m{i}"),
                (0..=i).map(|_| rec(today, &format!("L{i}"), &format!("P{i}"))).collect(),
            )
        })
        .collect();
    let dash = Dashboard::builder()
        .users(users)
        .now(t("2024-01-05T12:00:00Z"))
        .chart_days(14)
        .top_borrowers_limit(2)
        .top_languages_limit(3)
        .top_publishers_limit(1)
        .build()
        .unwrap();
    assert_eq!(dash.chart_dates().len(), 14);
    assert_eq!(dash.chart_borrow_counts().len(), 14);
    assert_eq!(dash.chart_borrow_counts()[13], 21);
    let ids: Vec<_> = dash.top_borrowers().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "4"]);
    assert_eq!(dash.top_languages().len(), 3);
    assert_eq!(dash.top_publishers().len(), 1);
    assert_eq!(dash.top_publishers()[0].name, "P5");
}

#[test]
fn zero_day_chart_is_rejected() {
    let err = Dashboard::builder().chart_days(0).build().unwrap_err();
    assert!(matches!(err, LibrisError::InvalidArg(_)));
}

#[test]
fn calendar_days_follow_the_configured_zone() {
    // 23:30 UTC on Jan 4 is already Jan 5 in Berlin
    let users = vec![member("u1", "Ada", vec![rec("2024-01-04T23:30:00Z", "English", "Acme")])];
    let now = t("2024-01-05T12:00:00Z");
    let utc = dashboard(users.clone(), now);
    let berlin = Dashboard::builder()
        .users(users)
        .now(now)
        .timezone(chrono_tz::Europe::Berlin)
        .build()
        .unwrap();
    assert_eq!(utc.chart_borrow_counts(), &[0, 0, 0, 0, 0, 1, 0]);
    assert_eq!(berlin.chart_borrow_counts(), &[0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn report_serializes_in_dashboard_shape() {
    let dash = dashboard(
        vec![member("u1", "Ada", vec![rec("2024-01-05T08:00:00Z", "English", "Acme")])],
        t("2024-01-05T12:00:00Z"),
    );
    let json = serde_json::to_value(dash.report()).unwrap();
    assert_eq!(json["chartDates"].as_array().map(Vec::len), Some(7));
    assert_eq!(json["chartBorrowCounts"][6], 1);
    assert_eq!(json["topBorrowers"][0]["id"], "u1");
    assert_eq!(json["topBorrowers"][0]["count"], 1);
    assert_eq!(json["topBorrowers"][0]["name"], "Ada");
    assert_eq!(json["topLanguages"][0]["language"], "English");
    assert_eq!(json["topPublishers"][0]["name"], "Acme");
    assert_eq!(json["totalMembers"], 1);
    assert_eq!(json["borrowedLastWeek"], 1);
}

fn arb_users() -> impl Strategy<Value = Vec<User>> {
    let date = (0i64..20 * 24).prop_map(|h| {
        (t("2024-01-05T12:00:00Z") - TimeDelta::hours(h)).to_rfc3339()
    });
    let record = (date, 0usize..8, 0usize..8).prop_map(|(d, l, p)| {
        rec(&d, &format!("lang-{l}"), &format!("pub-{p}"))
    });
    proptest::collection::vec(proptest::collection::vec(record, 0..10), 0..25).prop_map(
        |histories| {
            histories
                .into_iter()
                .enumerate()
                .map(|(i, h)| member(&i.to_string(), &format!("m{i}"), h))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn report_respects_bounds(users in arb_users()) {
        let dash = dashboard(users.clone(), t("2024-01-05T12:00:00Z"));
        let report = dash.report();
        let records: usize = users.iter().map(|u| u.history.len()).sum();

        prop_assert_eq!(report.chart_dates.len(), report.chart_borrow_counts.len());
        prop_assert!(report.chart_borrow_counts.iter().sum::<usize>() <= records);
        prop_assert!(report.borrowed_last_week <= records);
        prop_assert!(report.top_borrowers.len() <= 10);
        prop_assert!(report.top_languages.len() <= 5);
        prop_assert!(report.top_publishers.len() <= 5);
        prop_assert!(report.top_borrowers.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(report.top_languages.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(report.top_publishers.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert_eq!(report.total_members, users.len());
    }
}

#[test]
fn member_lookup_reports_missing_ids() {
    let dash = dashboard(vec![member("7", "Ada", vec![])], t("2024-01-05T12:00:00Z"));
    assert_eq!(dash.member(&RecordId::from("7")).map(|u| u.name.as_str()), Ok("Ada"));
    assert_eq!(
        dash.member(&RecordId::from("8")).unwrap_err(),
        LibrisError::NotFound {
            what: "user 8".to_string()
        }
    );
}
