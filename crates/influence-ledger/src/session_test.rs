use chrono::NaiveDate;
use influence_core::{Country, MediaCategory, TranscriptAvailability};
use influence_relay::{RelayClient, RelayErrorKind};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn form(title: &str) -> SampleForm {
    SampleForm {
        country: Some(Country::Lebanon),
        media_category: Some(MediaCategory::SocialMedia),
        media_title: title.to_string(),
        media_date: Some(date(2025, 1, 28)),
        transcript_available: Some(TranscriptAvailability::No),
        reach_score: Some(0.5),
        salience_score: Some(0.3),
        logos_score: Some(0.1),
        pathos_score: Some(0.2),
        ethos_score: Some(0.4),
        ..SampleForm::default()
    }
}

fn relay_target(endpoint: String) -> RelayTarget {
    let client = RelayClient::new(5, "influence-test/0.1").expect("test relay client");
    RelayTarget::new(client, endpoint)
}

fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/hook")
}

#[test]
fn accept_appends_valid_form() {
    let mut session = Session::new();
    let accepted = session.accept(form("clip")).expect("valid form");
    assert_eq!(accepted.position, 0);
    assert_eq!(accepted.sample.media_title, "clip");
    assert_eq!(session.ledger().len(), 1);
}

#[test]
fn out_of_window_date_never_reaches_ledger() {
    let mut session = Session::new();
    let bad = SampleForm {
        media_date: Some(date(2025, 4, 1)),
        ..form("late")
    };
    let err = session.accept(bad).unwrap_err();
    assert!(matches!(err, IntakeError::DateOutsideWindow { .. }));
    assert!(session.ledger().is_empty());
}

#[test]
fn window_boundary_dates_are_recorded() {
    let mut session = Session::new();
    for day in [date(2025, 1, 1), date(2025, 3, 31)] {
        session
            .accept(SampleForm {
                media_date: Some(day),
                ..form("edge")
            })
            .expect("boundary date should pass");
    }
    assert_eq!(session.ledger().len(), 2);
}

#[test]
fn rejected_form_leaves_earlier_samples_in_place() {
    let mut session = Session::new();
    session.accept(form("kept")).unwrap();
    let bad = SampleForm {
        reach_score: Some(3.0),
        ..form("bad score")
    };
    assert!(session.accept(bad).is_err());
    assert_eq!(session.ledger().len(), 1);
    assert_eq!(session.ledger().get(0).unwrap().media_title, "kept");
}

#[test]
fn session_context_is_copied_onto_each_sample() {
    let mut session = Session::new();
    session.set_context(SessionContext {
        country: Some(Country::Tunisia),
        public_issues: "water shortages".to_string(),
        issues_explanation: "summer cuts".to_string(),
        final_reflection: "none".to_string(),
    });

    let accepted = session
        .accept(SampleForm {
            country: None,
            ..form("with context")
        })
        .unwrap();
    assert_eq!(accepted.sample.country, Country::Tunisia);
    assert_eq!(accepted.sample.public_issues, "water shortages");
    assert_eq!(accepted.sample.final_reflection, "none");
}

#[test]
fn export_row_count_tracks_appends() {
    let mut session = Session::new();
    let empty = session.export_csv().unwrap();
    assert_eq!(String::from_utf8(empty.bytes).unwrap().lines().count(), 1);

    for n in 0..3 {
        session.accept(form(&format!("n{n}"))).unwrap();
    }
    let full = session.export_csv().unwrap();
    assert_eq!(String::from_utf8(full.bytes).unwrap().lines().count(), 4);
}

#[tokio::test]
async fn submit_without_relay_is_skipped() {
    let mut session = Session::new();
    let submission = session.submit(form("offline")).await.unwrap();
    assert_eq!(submission.position, 0);
    assert_eq!(submission.relay, RelayStatus::Skipped);
}

#[tokio::test]
async fn submit_relays_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::new().with_relay(relay_target(server.uri()));
    let submission = session.submit(form("online")).await.unwrap();
    assert!(submission.relay.is_relayed());
    assert!(submission
        .relay
        .user_message()
        .contains("sent to the shared spreadsheet"));
    assert_eq!(session.ledger().len(), 1);
}

#[tokio::test]
async fn submit_keeps_sample_when_relay_returns_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut session = Session::new().with_relay(relay_target(server.uri()));
    let submission = session.submit(form("kept anyway")).await.unwrap();

    assert!(
        matches!(
            submission.relay,
            RelayStatus::Failed {
                kind: RelayErrorKind::Status,
                ..
            }
        ),
        "expected status failure, got: {:?}",
        submission.relay
    );
    assert_eq!(session.ledger().len(), 1);
    assert_eq!(session.ledger().get(0).unwrap().media_title, "kept anyway");
}

#[tokio::test]
async fn submit_to_unreachable_endpoint_reports_transport_failure() {
    let mut session = Session::new().with_relay(relay_target(unreachable_endpoint()));
    session.accept(form("before")).unwrap();

    let submission = session.submit(form("refused")).await.unwrap();
    assert!(
        matches!(
            submission.relay,
            RelayStatus::Failed {
                kind: RelayErrorKind::Transport,
                ..
            }
        ),
        "expected transport failure, got: {:?}",
        submission.relay
    );
    assert_eq!(submission.position, 1);
    assert_eq!(session.ledger().len(), 2);
}

#[tokio::test]
async fn rejected_submit_makes_no_relay_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = Session::new().with_relay(relay_target(server.uri()));
    let bad = SampleForm {
        media_category: None,
        ..form("incomplete")
    };
    let err = session.submit(bad).await.unwrap_err();
    assert_eq!(err, IntakeError::MissingField("mediaCategory"));
    assert!(session.ledger().is_empty());
}
