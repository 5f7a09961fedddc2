//! Integration tests against a mock Axum service replaying recorded replies

use armcalc_core::{CalcDirection, CalcInput};
use armcalc_http::{ArmCalcClient, ArmCalcError};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use chrono::{TimeZone, Utc};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Recorded reply for `GET /CalcArm` (SRMP => ARM).
const CALC_ARM_REPLY: &str = r#"{"ABindicator": "", "ARM": 150.06, "CalculationReturnCode": 0, "CalculationReturnMessage": "", "RRQ": "", "RRT": "", "RealignmentYYYYMMDD": "19861204", "ReferenceYYYYMMDD": "20140819", "ResponseYYYYMMDD": "20140819", "SRMP": 150, "StateRoute": "005"}"#;

/// Recorded reply for `GET /CalcSrmp` (ARM => SRMP).
const CALC_SRMP_REPLY: &str = r#"{"ABindicator": "", "ARM": 150, "CalculationReturnCode": 0, "CalculationReturnMessage": "", "RRQ": "", "RRT": "", "RealignmentYYYYMMDD": "19861204", "ReferenceYYYYMMDD": "20140719", "ResponseYYYYMMDD": "20140719", "SRMP": 149.94, "StateRoute": "005"}"#;

/// Recorded reply for `POST /CalcBatch` with two items.
const CALC_BATCH_REPLY: &str = r#"[{"ABIndicator": "", "ARM": 0.32, "CalcType": 1, "RRQ": "", "RRT": "", "ReferenceDate": "/Date(1408431600000-0700)/", "ResponseDate": "/Date(1408431600000-0700)/", "SR": "005", "SRMP": 0.32, "TransId": null, "CalculationReturnCode": 0, "CalculationReturnMessage": "", "RealignmentDate": "/Date(534067200000-0800)/"}, {"ABIndicator": "", "ARM": 150.06, "CalcType": 0, "RRQ": "", "RRT": "", "ReferenceDate": "/Date(1408431600000-0700)/", "ResponseDate": "/Date(1408431600000-0700)/", "SR": "005", "SRMP": 150, "TransId": null, "CalculationReturnCode": 0, "CalculationReturnMessage": "", "RealignmentDate": "/Date(534067200000-0800)/"}]"#;

/// Reply carrying a nonzero service return code.
const DOMAIN_FAILURE_REPLY: &str = r#"{"StateRoute": "005", "ReferenceYYYYMMDD": "20140819", "ResponseYYYYMMDD": "20140819", "CalculationReturnCode": 1, "CalculationReturnMessage": "bad input"}"#;

fn test_input(direction: Option<CalcDirection>) -> CalcInput {
    let date = Utc.with_ymd_and_hms(2014, 8, 19, 0, 0, 0).unwrap();
    CalcInput {
        calc_direction: direction,
        sr: "005".to_string(),
        rrt: None,
        rrq: None,
        ab_indicator: None,
        reference_date: date,
        arm: Some(150.0),
        srmp: Some(150.0),
        response_date: date,
        trans_id: None,
    }
}

async fn start_service(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    addr
}

async fn start_recorded_service() -> SocketAddr {
    let app = Router::new()
        .route("/CalcArm", get(|| async { CALC_ARM_REPLY }))
        .route("/CalcSrmp", get(|| async { CALC_SRMP_REPLY }))
        .route("/CalcBatch", post(|| async { CALC_BATCH_REPLY }));
    start_service(app).await
}

#[tokio::test]
async fn test_srmp_to_arm_round_trip() {
    let addr = start_recorded_service().await;
    let client = ArmCalcClient::with_url(format!("http://{}", addr));

    let output = client.calc_arm(&test_input(None)).await.unwrap();

    assert!(output.is_success());
    assert_eq!(output.sr, "005");
    assert_eq!(output.arm, Some(150.06));
    assert_eq!(output.ab_indicator, None);
    assert_eq!(output.calc_direction, Some(CalcDirection::SrmpToArm));
    assert_eq!(
        output.reference_date,
        Utc.with_ymd_and_hms(2014, 8, 19, 0, 0, 0).unwrap()
    );
    assert_eq!(
        output.realignment_date,
        Some(Utc.with_ymd_and_hms(1986, 12, 4, 0, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn test_arm_to_srmp_round_trip() {
    let addr = start_recorded_service().await;
    let client = ArmCalcClient::with_url(format!("http://{}", addr));

    let output = client.calc_srmp(&test_input(None)).await.unwrap();

    assert!(output.is_success());
    assert_eq!(output.srmp, Some(149.94));
    assert_eq!(output.calc_direction, Some(CalcDirection::ArmToSrmp));
}

#[tokio::test]
async fn test_batch_round_trip_preserves_order() {
    let addr = start_recorded_service().await;
    let client = ArmCalcClient::with_url(format!("http://{}", addr));

    let inputs = vec![
        test_input(Some(CalcDirection::ArmToSrmp)),
        test_input(Some(CalcDirection::SrmpToArm)),
    ];
    let outputs = client.calc_batch(&inputs).await.unwrap();

    assert_eq!(outputs.len(), inputs.len());
    assert_eq!(outputs[0].calc_direction, Some(CalcDirection::ArmToSrmp));
    assert_eq!(outputs[1].calc_direction, Some(CalcDirection::SrmpToArm));
    // Empty strings from the wire come back as None, not "".
    assert_eq!(outputs[0].rrt, None);
    assert_eq!(outputs[0].calculation_return_message, None);
    // WCF offset math: 1408431600000 - 700ms.
    assert_eq!(outputs[0].reference_date.timestamp_millis(), 1408431599300);
}

#[tokio::test]
async fn test_domain_failure_resolves_as_normal_result() {
    let app = Router::new().route("/CalcArm", get(|| async { DOMAIN_FAILURE_REPLY }));
    let addr = start_service(app).await;
    let client = ArmCalcClient::with_url(format!("http://{}", addr));

    let output = client.calc_arm(&test_input(None)).await.unwrap();
    assert!(!output.is_success());
    assert_eq!(output.calculation_return_code, 1);
    assert_eq!(
        output.calculation_return_message.as_deref(),
        Some("bad input")
    );
}

#[tokio::test]
async fn test_status_codes_are_not_interpreted() {
    // The layer parses the body regardless of status; only the service's own
    // return code signals calculation failure.
    let app = Router::new().route(
        "/CalcArm",
        get(|| async { (StatusCode::NOT_FOUND, CALC_ARM_REPLY) }),
    );
    let addr = start_service(app).await;
    let client = ArmCalcClient::with_url(format!("http://{}", addr));

    let output = client.calc_arm(&test_input(None)).await.unwrap();
    assert!(output.is_success());
}

#[tokio::test]
async fn test_malformed_reply_surfaces_as_wire_error() {
    let app = Router::new().route("/CalcArm", get(|| async { "<html>oops</html>" }));
    let addr = start_service(app).await;
    let client = ArmCalcClient::with_url(format!("http://{}", addr));

    let result = client.calc_arm(&test_input(None)).await;
    assert!(matches!(result, Err(ArmCalcError::Wire(_))));
}

#[tokio::test]
async fn test_unreachable_service_fails_with_transport_error() {
    let client = ArmCalcClient::with_url("http://127.0.0.1:1");

    let result = client.calc_arm(&test_input(None)).await;
    assert!(matches!(result, Err(ArmCalcError::Transport(_))));
}
