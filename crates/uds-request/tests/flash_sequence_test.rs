//! End-to-end request sequences as a tester would send them

use pretty_assertions::assert_eq;
use rstest::rstest;
use uds_request::sub_function::{
    communication_control_type, dtc_setting_type, reset_type, routine_control_type, session_type,
};
use uds_request::{
    classify_response, NegativeResponseCode, RequestBuilder, RequestError, Response,
    UdsRequest, UdsRequestConfig,
};

#[test]
fn test_programming_sequence() {
    let b = RequestBuilder::new();
    let firmware = [0xA5u8; 4];

    let sequence: Vec<UdsRequest> = vec![
        b.diagnostic_session_control(session_type::EXTENDED_SESSION),
        b.control_dtc_setting(dtc_setting_type::OFF, None),
        b.communication_control(communication_control_type::DISABLE_RX_AND_TX, 0x01, None),
        b.diagnostic_session_control(session_type::PROGRAMMING_SESSION),
        b.security_access_request_seed(1).unwrap(),
        b.security_access_send_key(1, &[0x11, 0x22, 0x33, 0x44]).unwrap(),
        b.routine_control(routine_control_type::START_ROUTINE, 0xFF00, Some(&[0x00])),
        b.request_download(0x00, 0x44, 0x0800_0000, firmware.len() as u64)
            .unwrap(),
        b.transfer_data(0x01, &firmware),
        b.request_transfer_exit(None),
        b.ecu_reset(reset_type::HARD_RESET),
    ];

    let rendered: Vec<String> = sequence.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "10 03",
            "85 02",
            "28 03 01",
            "10 02",
            "27 01",
            "27 02 11 22 33 44",
            "31 01 FF 00 00",
            "34 00 44 08 00 00 00 00 00 00 04",
            "36 01 A5 A5 A5 A5",
            "37",
            "11 01",
        ]
    );
}

#[test]
fn test_keep_alive_without_response() {
    let b = RequestBuilder::new();
    let request = b.tester_present(0x00).suppress_positive_response().unwrap();
    assert_eq!(request.as_bytes(), &[0x3E, 0x80]);
    assert_eq!(request.sub_function(), Some(0x00));
}

#[rstest]
#[case("10 01", "DiagnosticSessionControl")]
#[case("22 F1 90", "ReadDataByIdentifier")]
#[case("38 05 00 01 2F", "RequestFileTransfer")]
fn test_parsed_request_names(#[case] hex: &str, #[case] name: &str) {
    let request: UdsRequest = hex.parse().unwrap();
    assert_eq!(request.service_name(), Some(name));
    assert_eq!(request.to_string(), hex);
}

#[test]
fn test_request_response_pairing() {
    let b = RequestBuilder::new();
    let request = b.read_data_by_identifier(&[0xF190]).unwrap();

    let positive = classify_response(request.service_id(), &[0x62, 0xF1, 0x90, 0x57]).unwrap();
    assert!(positive.is_positive());

    let negative = classify_response(request.service_id(), &[0x7F, 0x22, 0x31]).unwrap();
    assert_eq!(
        negative,
        Response::Negative {
            service_id: 0x22,
            nrc: NegativeResponseCode::RequestOutOfRange,
        }
    );
}

#[test]
fn test_oem_configuration() {
    let config = UdsRequestConfig::from_toml_str(
        r#"
[service_overrides]
diagnostic_session_control = 0x50
request_download = 0x74
"#,
    )
    .unwrap();
    let b = RequestBuilder::with_service_ids(config.service_ids());

    assert_eq!(b.diagnostic_session_control(0x02).to_string(), "50 02");
    assert_eq!(
        b.request_download(0x00, 0x11, 0x10, 0x20).unwrap().to_string(),
        "74 00 11 10 20"
    );
    assert_eq!(b.transfer_data(0x01, &[]).to_string(), "36 01");

    let session = b
        .diagnostic_session_control(0x02)
        .suppress_positive_response()
        .unwrap();
    assert_eq!(session.to_string(), "50 82");
    assert_eq!(session.report().service, "DiagnosticSessionControl");
    assert!(b
        .request_download(0x00, 0x11, 0x10, 0x20)
        .unwrap()
        .suppress_positive_response()
        .is_err());
}

#[test]
fn test_memory_errors_surface() {
    let b = RequestBuilder::new();
    assert_eq!(
        b.read_memory_by_address(0x11, 0x100, 0x01),
        Err(RequestError::ValueOutOfRange {
            field: "memoryAddress",
            value: 0x100,
            len: 1,
        })
    );
}
