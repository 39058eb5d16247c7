//! UDS service identifiers (ISO 14229-1)

use crate::config::ServiceOverrides;

/// Offset added to a request SID to form its positive response SID
pub const POSITIVE_RESPONSE_OFFSET: u8 = 0x40;

/// Standard UDS service ID constants
pub mod service_id {
    // Diagnostic and communication management
    pub const DIAGNOSTIC_SESSION_CONTROL: u8 = 0x10;
    pub const ECU_RESET: u8 = 0x11;
    pub const SECURITY_ACCESS: u8 = 0x27;
    pub const COMMUNICATION_CONTROL: u8 = 0x28;
    pub const TESTER_PRESENT: u8 = 0x3E;
    pub const ACCESS_TIMING_PARAMETER: u8 = 0x83;
    pub const SECURED_DATA_TRANSMISSION: u8 = 0x84;
    pub const CONTROL_DTC_SETTING: u8 = 0x85;
    pub const RESPONSE_ON_EVENT: u8 = 0x86;
    pub const LINK_CONTROL: u8 = 0x87;

    // Data transmission
    pub const READ_DATA_BY_ID: u8 = 0x22;
    pub const READ_MEMORY_BY_ADDRESS: u8 = 0x23;
    pub const READ_SCALING_DATA_BY_ID: u8 = 0x24;
    pub const READ_DATA_BY_PERIODIC_ID: u8 = 0x2A;
    pub const DYNAMICALLY_DEFINE_DATA_ID: u8 = 0x2C;
    pub const WRITE_DATA_BY_ID: u8 = 0x2E;
    pub const WRITE_MEMORY_BY_ADDRESS: u8 = 0x3D;

    // Stored data transmission
    pub const CLEAR_DIAGNOSTIC_INFO: u8 = 0x14;
    pub const READ_DTC_INFO: u8 = 0x19;

    // Input/output control
    pub const IO_CONTROL_BY_ID: u8 = 0x2F;

    // Remote activation of routine
    pub const ROUTINE_CONTROL: u8 = 0x31;

    // Upload/download
    pub const REQUEST_DOWNLOAD: u8 = 0x34;
    pub const REQUEST_UPLOAD: u8 = 0x35;
    pub const TRANSFER_DATA: u8 = 0x36;
    pub const REQUEST_TRANSFER_EXIT: u8 = 0x37;
    pub const REQUEST_FILE_TRANSFER: u8 = 0x38;

    pub const NEGATIVE_RESPONSE: u8 = 0x7F;
}

/// Positive response SID for a request SID
pub fn positive_response_sid(sid: u8) -> u8 {
    sid.wrapping_add(POSITIVE_RESPONSE_OFFSET)
}

/// Human-readable service name for a standard SID
pub fn service_name(sid: u8) -> Option<&'static str> {
    use service_id::*;

    let name = match sid {
        DIAGNOSTIC_SESSION_CONTROL => "DiagnosticSessionControl",
        ECU_RESET => "ECUReset",
        SECURITY_ACCESS => "SecurityAccess",
        COMMUNICATION_CONTROL => "CommunicationControl",
        TESTER_PRESENT => "TesterPresent",
        ACCESS_TIMING_PARAMETER => "AccessTimingParameter",
        SECURED_DATA_TRANSMISSION => "SecuredDataTransmission",
        CONTROL_DTC_SETTING => "ControlDTCSetting",
        RESPONSE_ON_EVENT => "ResponseOnEvent",
        LINK_CONTROL => "LinkControl",
        READ_DATA_BY_ID => "ReadDataByIdentifier",
        READ_MEMORY_BY_ADDRESS => "ReadMemoryByAddress",
        READ_SCALING_DATA_BY_ID => "ReadScalingDataByIdentifier",
        READ_DATA_BY_PERIODIC_ID => "ReadDataByPeriodicIdentifier",
        DYNAMICALLY_DEFINE_DATA_ID => "DynamicallyDefineDataIdentifier",
        WRITE_DATA_BY_ID => "WriteDataByIdentifier",
        WRITE_MEMORY_BY_ADDRESS => "WriteMemoryByAddress",
        CLEAR_DIAGNOSTIC_INFO => "ClearDiagnosticInformation",
        READ_DTC_INFO => "ReadDTCInformation",
        IO_CONTROL_BY_ID => "InputOutputControlByIdentifier",
        ROUTINE_CONTROL => "RoutineControl",
        REQUEST_DOWNLOAD => "RequestDownload",
        REQUEST_UPLOAD => "RequestUpload",
        TRANSFER_DATA => "TransferData",
        REQUEST_TRANSFER_EXIT => "RequestTransferExit",
        REQUEST_FILE_TRANSFER => "RequestFileTransfer",
        NEGATIVE_RESPONSE => "NegativeResponse",
        _ => return None,
    };
    Some(name)
}

/// Whether the standard service carries a sub-function byte after the SID
pub fn has_sub_function(sid: u8) -> bool {
    use service_id::*;

    matches!(
        sid,
        DIAGNOSTIC_SESSION_CONTROL
            | ECU_RESET
            | SECURITY_ACCESS
            | COMMUNICATION_CONTROL
            | TESTER_PRESENT
            | ACCESS_TIMING_PARAMETER
            | CONTROL_DTC_SETTING
            | RESPONSE_ON_EVENT
            | LINK_CONTROL
            | DYNAMICALLY_DEFINE_DATA_ID
            | READ_DTC_INFO
            | ROUTINE_CONTROL
    )
}

/// Resolved service IDs for a specific ECU
///
/// Starts from the standard UDS table and applies any OEM-specific overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceIds {
    pub diagnostic_session_control: u8,
    pub ecu_reset: u8,
    pub security_access: u8,
    pub communication_control: u8,
    pub tester_present: u8,
    pub access_timing_parameter: u8,
    pub secured_data_transmission: u8,
    pub control_dtc_setting: u8,
    pub response_on_event: u8,
    pub link_control: u8,
    pub read_data_by_id: u8,
    pub read_memory_by_address: u8,
    pub read_scaling_data_by_id: u8,
    pub read_data_by_periodic_id: u8,
    pub dynamically_define_data_id: u8,
    pub write_data_by_id: u8,
    pub write_memory_by_address: u8,
    pub clear_diagnostic_info: u8,
    pub read_dtc_info: u8,
    pub io_control_by_id: u8,
    pub routine_control: u8,
    pub request_download: u8,
    pub request_upload: u8,
    pub transfer_data: u8,
    pub request_transfer_exit: u8,
    pub request_file_transfer: u8,
}

impl Default for ServiceIds {
    fn default() -> Self {
        Self {
            diagnostic_session_control: service_id::DIAGNOSTIC_SESSION_CONTROL,
            ecu_reset: service_id::ECU_RESET,
            security_access: service_id::SECURITY_ACCESS,
            communication_control: service_id::COMMUNICATION_CONTROL,
            tester_present: service_id::TESTER_PRESENT,
            access_timing_parameter: service_id::ACCESS_TIMING_PARAMETER,
            secured_data_transmission: service_id::SECURED_DATA_TRANSMISSION,
            control_dtc_setting: service_id::CONTROL_DTC_SETTING,
            response_on_event: service_id::RESPONSE_ON_EVENT,
            link_control: service_id::LINK_CONTROL,
            read_data_by_id: service_id::READ_DATA_BY_ID,
            read_memory_by_address: service_id::READ_MEMORY_BY_ADDRESS,
            read_scaling_data_by_id: service_id::READ_SCALING_DATA_BY_ID,
            read_data_by_periodic_id: service_id::READ_DATA_BY_PERIODIC_ID,
            dynamically_define_data_id: service_id::DYNAMICALLY_DEFINE_DATA_ID,
            write_data_by_id: service_id::WRITE_DATA_BY_ID,
            write_memory_by_address: service_id::WRITE_MEMORY_BY_ADDRESS,
            clear_diagnostic_info: service_id::CLEAR_DIAGNOSTIC_INFO,
            read_dtc_info: service_id::READ_DTC_INFO,
            io_control_by_id: service_id::IO_CONTROL_BY_ID,
            routine_control: service_id::ROUTINE_CONTROL,
            request_download: service_id::REQUEST_DOWNLOAD,
            request_upload: service_id::REQUEST_UPLOAD,
            transfer_data: service_id::TRANSFER_DATA,
            request_transfer_exit: service_id::REQUEST_TRANSFER_EXIT,
            request_file_transfer: service_id::REQUEST_FILE_TRANSFER,
        }
    }
}

impl ServiceIds {
    /// SID this table uses for a standard service; unknown SIDs pass through
    pub fn resolve(&self, service: u8) -> u8 {
        match service {
            service_id::DIAGNOSTIC_SESSION_CONTROL => self.diagnostic_session_control,
            service_id::ECU_RESET => self.ecu_reset,
            service_id::SECURITY_ACCESS => self.security_access,
            service_id::COMMUNICATION_CONTROL => self.communication_control,
            service_id::TESTER_PRESENT => self.tester_present,
            service_id::ACCESS_TIMING_PARAMETER => self.access_timing_parameter,
            service_id::SECURED_DATA_TRANSMISSION => self.secured_data_transmission,
            service_id::CONTROL_DTC_SETTING => self.control_dtc_setting,
            service_id::RESPONSE_ON_EVENT => self.response_on_event,
            service_id::LINK_CONTROL => self.link_control,
            service_id::READ_DATA_BY_ID => self.read_data_by_id,
            service_id::READ_MEMORY_BY_ADDRESS => self.read_memory_by_address,
            service_id::READ_SCALING_DATA_BY_ID => self.read_scaling_data_by_id,
            service_id::READ_DATA_BY_PERIODIC_ID => self.read_data_by_periodic_id,
            service_id::DYNAMICALLY_DEFINE_DATA_ID => self.dynamically_define_data_id,
            service_id::WRITE_DATA_BY_ID => self.write_data_by_id,
            service_id::WRITE_MEMORY_BY_ADDRESS => self.write_memory_by_address,
            service_id::CLEAR_DIAGNOSTIC_INFO => self.clear_diagnostic_info,
            service_id::READ_DTC_INFO => self.read_dtc_info,
            service_id::IO_CONTROL_BY_ID => self.io_control_by_id,
            service_id::ROUTINE_CONTROL => self.routine_control,
            service_id::REQUEST_DOWNLOAD => self.request_download,
            service_id::REQUEST_UPLOAD => self.request_upload,
            service_id::TRANSFER_DATA => self.transfer_data,
            service_id::REQUEST_TRANSFER_EXIT => self.request_transfer_exit,
            service_id::REQUEST_FILE_TRANSFER => self.request_file_transfer,
            other => other,
        }
    }

    /// Standard service that this table maps `sid` to, if any
    ///
    /// When several services share an OEM SID the first in table order wins.
    pub fn standard_service_id(&self, sid: u8) -> Option<u8> {
        self.entries()
            .into_iter()
            .find(|&(_, resolved)| resolved == sid)
            .map(|(service, _)| service)
    }

    fn entries(&self) -> [(u8, u8); 26] {
        [
            (service_id::DIAGNOSTIC_SESSION_CONTROL, self.diagnostic_session_control),
            (service_id::ECU_RESET, self.ecu_reset),
            (service_id::SECURITY_ACCESS, self.security_access),
            (service_id::COMMUNICATION_CONTROL, self.communication_control),
            (service_id::TESTER_PRESENT, self.tester_present),
            (service_id::ACCESS_TIMING_PARAMETER, self.access_timing_parameter),
            (service_id::SECURED_DATA_TRANSMISSION, self.secured_data_transmission),
            (service_id::CONTROL_DTC_SETTING, self.control_dtc_setting),
            (service_id::RESPONSE_ON_EVENT, self.response_on_event),
            (service_id::LINK_CONTROL, self.link_control),
            (service_id::READ_DATA_BY_ID, self.read_data_by_id),
            (service_id::READ_MEMORY_BY_ADDRESS, self.read_memory_by_address),
            (service_id::READ_SCALING_DATA_BY_ID, self.read_scaling_data_by_id),
            (service_id::READ_DATA_BY_PERIODIC_ID, self.read_data_by_periodic_id),
            (service_id::DYNAMICALLY_DEFINE_DATA_ID, self.dynamically_define_data_id),
            (service_id::WRITE_DATA_BY_ID, self.write_data_by_id),
            (service_id::WRITE_MEMORY_BY_ADDRESS, self.write_memory_by_address),
            (service_id::CLEAR_DIAGNOSTIC_INFO, self.clear_diagnostic_info),
            (service_id::READ_DTC_INFO, self.read_dtc_info),
            (service_id::IO_CONTROL_BY_ID, self.io_control_by_id),
            (service_id::ROUTINE_CONTROL, self.routine_control),
            (service_id::REQUEST_DOWNLOAD, self.request_download),
            (service_id::REQUEST_UPLOAD, self.request_upload),
            (service_id::TRANSFER_DATA, self.transfer_data),
            (service_id::REQUEST_TRANSFER_EXIT, self.request_transfer_exit),
            (service_id::REQUEST_FILE_TRANSFER, self.request_file_transfer),
        ]
    }

    /// Create ServiceIds with OEM-specific overrides applied
    pub fn from_overrides(overrides: &ServiceOverrides) -> Self {
        let mut ids = Self::default();

        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(v) = overrides.$field {
                        tracing::debug!(
                            service = stringify!($field),
                            standard = ids.$field,
                            sid = v,
                            "Applying service ID override"
                        );
                        ids.$field = v;
                    }
                )*
            };
        }

        apply!(
            diagnostic_session_control,
            ecu_reset,
            security_access,
            communication_control,
            tester_present,
            access_timing_parameter,
            secured_data_transmission,
            control_dtc_setting,
            response_on_event,
            link_control,
            read_data_by_id,
            read_memory_by_address,
            read_scaling_data_by_id,
            read_data_by_periodic_id,
            dynamically_define_data_id,
            write_data_by_id,
            write_memory_by_address,
            clear_diagnostic_info,
            read_dtc_info,
            io_control_by_id,
            routine_control,
            request_download,
            request_upload,
            transfer_data,
            request_transfer_exit,
            request_file_transfer,
        );

        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_response_sid() {
        assert_eq!(positive_response_sid(service_id::READ_DATA_BY_ID), 0x62);
        assert_eq!(positive_response_sid(service_id::TESTER_PRESENT), 0x7E);
        assert_eq!(positive_response_sid(service_id::LINK_CONTROL), 0xC7);
    }

    #[test]
    fn test_overrides_replace_only_given_services() {
        let overrides = ServiceOverrides {
            read_data_by_id: Some(0xA2),
            routine_control: Some(0xB1),
            ..Default::default()
        };

        let ids = ServiceIds::from_overrides(&overrides);
        assert_eq!(ids.read_data_by_id, 0xA2);
        assert_eq!(ids.routine_control, 0xB1);
        assert_eq!(ids.ecu_reset, service_id::ECU_RESET);
        assert_eq!(ids.request_file_transfer, service_id::REQUEST_FILE_TRANSFER);
    }

    #[test]
    fn test_service_names() {
        assert_eq!(service_name(0x10), Some("DiagnosticSessionControl"));
        assert_eq!(service_name(0x38), Some("RequestFileTransfer"));
        assert_eq!(service_name(0x01), None);
    }

    #[test]
    fn test_sub_function_services() {
        assert!(has_sub_function(service_id::TESTER_PRESENT));
        assert!(has_sub_function(service_id::ROUTINE_CONTROL));
        assert!(!has_sub_function(service_id::READ_DATA_BY_ID));
        assert!(!has_sub_function(service_id::TRANSFER_DATA));
    }

    #[test]
    fn test_resolve_and_reverse_lookup_follow_overrides() {
        let ids = ServiceIds::from_overrides(&ServiceOverrides {
            tester_present: Some(0xBE),
            read_data_by_id: Some(0x31),
            ..Default::default()
        });

        assert_eq!(ids.resolve(service_id::TESTER_PRESENT), 0xBE);
        assert_eq!(ids.resolve(service_id::ECU_RESET), service_id::ECU_RESET);
        assert_eq!(ids.standard_service_id(0xBE), Some(service_id::TESTER_PRESENT));
        assert_eq!(ids.standard_service_id(0x3E), None);
        // 0x31 is shared with RoutineControl; table order puts RDBI first
        assert_eq!(ids.standard_service_id(0x31), Some(service_id::READ_DATA_BY_ID));
    }
}
