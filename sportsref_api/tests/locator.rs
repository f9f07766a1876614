use sportsref_api::{Locator, DEFAULT_BASE_URL};

#[test]
fn default_locator_uses_production_origin() {
    let locator = Locator::default();
    assert_eq!(locator.base_url(), DEFAULT_BASE_URL);
    assert_eq!(locator.season(), 2018);
}

#[test]
fn roster_url_template() {
    insta::assert_snapshot!(
        Locator::default().roster_url("duke"),
        @"https://www.sports-reference.com/cbb/schools/duke/2018.html"
    );
}

#[test]
fn schedule_url_template() {
    insta::assert_snapshot!(
        Locator::default().schedule_url("north-carolina"),
        @"https://www.sports-reference.com/cbb/schools/north-carolina/2018-schedule.html"
    );
}

#[test]
fn boxscore_url_template() {
    insta::assert_snapshot!(
        Locator::default().boxscore_url("north-carolina", "2018-02-08", "21"),
        @"https://www.sports-reference.com/cbb/boxscores/2018-02-08-21-north-carolina.html"
    );
}

#[test]
fn custom_season_and_trailing_slash() {
    let locator = Locator::new("http://localhost:8080/cbb/", 2019).unwrap();
    assert_eq!(locator.base_url(), "http://localhost:8080/cbb");
    assert_eq!(
        locator.roster_url("kansas"),
        "http://localhost:8080/cbb/schools/kansas/2019.html"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    assert!(Locator::new("not a url", 2018).is_err());
}
