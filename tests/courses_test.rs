use chrono::NaiveDate;
use sis_sync::config::OutputSettings;
use sis_sync::error::AppError;
use sis_sync::jex::{JexCourse, StaticJexClient};
use sis_sync::services::courses::generate_courses;

const HEADER: &str =
    "course_id,short_name,long_name,term_id,status,start_date,end_date,blueprint_course_id";

fn jex_course(id: &str, open: &str) -> JexCourse {
    JexCourse {
        id: Some(id.to_string()),
        term: Some("SP".to_string()),
        year: Some(2020),
        open_date: Some(open.to_string()),
        ..Default::default()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

#[tokio::test]
async fn header_matches_canvas_csv_format() {
    let csv = generate_courses(&StaticJexClient::new(vec![]), &OutputSettings::default(), today())
        .await
        .unwrap();
    assert_eq!(csv, HEADER);
}

#[tokio::test]
async fn outputs_courses_in_order_of_start_date() {
    let jex = StaticJexClient::new(vec![
        jex_course("AH-1000-03-W20", "2020-03-03"),
        jex_course("AH-1000-01-W20", "2020-01-01"),
        jex_course("AH-1000-02-W20", "2020-02-02"),
    ]);

    let csv = generate_courses(&jex, &OutputSettings::default(), today())
        .await
        .unwrap();

    assert_eq!(
        csv,
        [
            HEADER,
            "AH-1000-01-W20,AH-1000-01-W20,,2020-SP,active,2020-01-01,,TEMPLATE-ENHANCEDCOURSE",
            "AH-1000-02-W20,AH-1000-02-W20,,2020-SP,active,2020-02-02,,TEMPLATE-ENHANCEDCOURSE",
            "AH-1000-03-W20,AH-1000-03-W20,,2020-SP,active,2020-03-03,,TEMPLATE-ENHANCEDCOURSE",
        ]
        .join("\n")
    );
}

#[tokio::test]
async fn courses_closed_before_today_are_skipped() {
    let mut closed = jex_course("AH-1000-01-F19", "2019-09-01");
    closed.close_date = Some("2019-12-20".to_string());
    let mut closing_today = jex_course("AH-1000-02-F19", "2019-09-02");
    closing_today.close_date = Some("2020-01-01".to_string());

    let csv = generate_courses(
        &StaticJexClient::new(vec![closed, closing_today]),
        &OutputSettings::default(),
        today(),
    )
    .await
    .unwrap();

    let ids: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["AH-1000-02-F19"]);
}

#[tokio::test]
async fn blueprint_comes_from_settings() {
    let output = OutputSettings {
        time_zone: chrono_tz::America::Chicago,
        blueprint_course_id: "TEMPLATE-BASIC".to_string(),
    };

    let csv = generate_courses(
        &StaticJexClient::new(vec![jex_course("AH-1000-01-W20", "2020-01-01")]),
        &output,
        today(),
    )
    .await
    .unwrap();

    assert!(csv.ends_with(",2020-01-01,,TEMPLATE-BASIC"), "{csv}");
}

#[tokio::test]
async fn dates_pass_through_but_order_by_instant() {
    // 20:00 at -05:00 is 01:00 UTC the next day, later than 00:30 UTC.
    let evening = jex_course("AH-1000-02-W20", "2020-01-01T20:00:00-0500");
    let midnight = jex_course("AH-1000-01-W20", "2020-01-02T00:30:00Z");

    let csv = generate_courses(
        &StaticJexClient::new(vec![evening, midnight]),
        &OutputSettings::default(),
        today(),
    )
    .await
    .unwrap();

    let starts: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(5).unwrap())
        .collect();
    assert_eq!(starts, vec!["2020-01-02T00:30:00Z", "2020-01-01T20:00:00-0500"]);
}

#[tokio::test]
async fn unparseable_date_still_fails() {
    let result = generate_courses(
        &StaticJexClient::new(vec![jex_course("AH-1000-01-W20", "first week of spring")]),
        &OutputSettings::default(),
        today(),
    )
    .await;
    assert!(matches!(
        result,
        Err(AppError::InvalidDate { field: "openDate", .. })
    ));
}
