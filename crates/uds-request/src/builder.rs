//! Request builders for every UDS service
//!
//! Each method returns the complete request, SID first, multi-byte values
//! big-endian. Methods whose parameters can violate a length or range
//! constraint return `Result`.

use crate::error::RequestError;
use crate::memory::{encode_sized, AddressAndLengthFormat};
use crate::request::UdsRequest;
use crate::sid::{service_id, ServiceIds};
use crate::sub_function::{definition_type, file_operation_mode, transmission_mode};

/// Highest security level whose key sub-function (2N) stays below 0x7F
pub const MAX_SECURITY_LEVEL: u8 = 0x3F;

/// Source element for DynamicallyDefineDataIdentifier defineByIdentifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDataIdentifier {
    pub did: u16,
    /// 1-based byte position within the source record
    pub position: u8,
    pub memory_size: u8,
}

/// Memory element for DynamicallyDefineDataIdentifier defineByMemoryAddress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRegion {
    pub address: u64,
    pub size: u64,
}

/// DynamicallyDefineDataIdentifier (0x2C) request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicDefinition {
    ByIdentifier {
        did: u16,
        sources: Vec<SourceDataIdentifier>,
    },
    ByMemoryAddress {
        did: u16,
        alfid: u8,
        regions: Vec<MemoryRegion>,
    },
    /// Clear one dynamic DID, or all of them when `did` is `None`
    Clear { did: Option<u16> },
}

/// File sizes for RequestFileTransfer add/replace/resume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSize {
    /// Bytes used for each of the two size fields
    pub parameter_length: u8,
    pub uncompressed: u64,
    pub compressed: u64,
}

/// RequestFileTransfer (0x38) request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTransfer {
    pub mode: u8,
    pub path: Vec<u8>,
    pub data_format: Option<u8>,
    pub file_size: Option<FileSize>,
}

impl FileTransfer {
    pub fn new(mode: u8, path: impl Into<Vec<u8>>) -> Self {
        Self {
            mode,
            path: path.into(),
            data_format: None,
            file_size: None,
        }
    }

    pub fn with_data_format(mut self, data_format: u8) -> Self {
        self.data_format = Some(data_format);
        self
    }

    pub fn with_file_size(mut self, file_size: FileSize) -> Self {
        self.file_size = Some(file_size);
        self
    }
}

/// Builds UDS requests against a (possibly OEM-modified) service table
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBuilder {
    svc: ServiceIds,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom service IDs (for OEM-specific implementations)
    pub fn with_service_ids(service_ids: ServiceIds) -> Self {
        Self { svc: service_ids }
    }

    pub fn service_ids(&self) -> &ServiceIds {
        &self.svc
    }

    /// Empty request for the standard service, under this builder's SID
    fn start(&self, service: u8) -> UdsRequest {
        UdsRequest::for_service(service, self.svc.resolve(service))
    }

    fn finish(request: UdsRequest) -> UdsRequest {
        tracing::trace!(
            sid = request.service_id(),
            request = %request,
            "Built UDS request"
        );
        request
    }

    // =========================================================================
    // Diagnostic and communication management
    // =========================================================================

    /// DiagnosticSessionControl (0x10)
    pub fn diagnostic_session_control(&self, session_type: u8) -> UdsRequest {
        let mut request = self.start(service_id::DIAGNOSTIC_SESSION_CONTROL);
        request.push(session_type);
        Self::finish(request)
    }

    /// ECUReset (0x11)
    pub fn ecu_reset(&self, reset_type: u8) -> UdsRequest {
        let mut request = self.start(service_id::ECU_RESET);
        request.push(reset_type);
        Self::finish(request)
    }

    /// SecurityAccess (0x27) with a raw access type
    ///
    /// `data_record` is the key for send-key types, or optional
    /// securityAccessDataRecord for request-seed types.
    pub fn security_access(&self, access_type: u8, data_record: Option<&[u8]>) -> UdsRequest {
        let mut request = self.start(service_id::SECURITY_ACCESS);
        request.push(access_type);
        if let Some(record) = data_record {
            request.extend(record);
        }
        Self::finish(request)
    }

    /// SecurityAccess requestSeed for `level` (sub-function 2N-1)
    pub fn security_access_request_seed(&self, level: u8) -> Result<UdsRequest, RequestError> {
        check_security_level(level)?;
        Ok(self.security_access(level * 2 - 1, None))
    }

    /// SecurityAccess sendKey for `level` (sub-function 2N)
    pub fn security_access_send_key(&self, level: u8, key: &[u8]) -> Result<UdsRequest, RequestError> {
        check_security_level(level)?;
        if key.is_empty() {
            return Err(RequestError::InvalidArgument(
                "security key must not be empty".to_string(),
            ));
        }
        Ok(self.security_access(level * 2, Some(key)))
    }

    /// CommunicationControl (0x28)
    pub fn communication_control(
        &self,
        control_type: u8,
        communication_type: u8,
        node_identification_number: Option<u16>,
    ) -> UdsRequest {
        let mut request = self.start(service_id::COMMUNICATION_CONTROL);
        request.push(control_type).push(communication_type);
        if let Some(node) = node_identification_number {
            request.push_u16(node);
        }
        Self::finish(request)
    }

    /// TesterPresent (0x3E)
    pub fn tester_present(&self, sub_function: u8) -> UdsRequest {
        let mut request = self.start(service_id::TESTER_PRESENT);
        request.push(sub_function);
        Self::finish(request)
    }

    /// AccessTimingParameter (0x83)
    pub fn access_timing_parameter(
        &self,
        access_type: u8,
        request_record: Option<&[u8]>,
    ) -> UdsRequest {
        let mut request = self.start(service_id::ACCESS_TIMING_PARAMETER);
        request.push(access_type);
        if let Some(record) = request_record {
            request.extend(record);
        }
        Self::finish(request)
    }

    /// SecuredDataTransmission (0x84)
    pub fn secured_data_transmission(&self, security_data_request_record: &[u8]) -> UdsRequest {
        let mut request = self.start(service_id::SECURED_DATA_TRANSMISSION);
        request.extend(security_data_request_record);
        Self::finish(request)
    }

    /// ControlDTCSetting (0x85)
    pub fn control_dtc_setting(&self, setting_type: u8, option_record: Option<&[u8]>) -> UdsRequest {
        let mut request = self.start(service_id::CONTROL_DTC_SETTING);
        request.push(setting_type);
        if let Some(record) = option_record {
            request.extend(record);
        }
        Self::finish(request)
    }

    /// ResponseOnEvent (0x86)
    pub fn response_on_event(
        &self,
        event_type: u8,
        event_window_time: u8,
        event_type_record: Option<&[u8]>,
        service_to_respond_to_record: Option<&[u8]>,
    ) -> UdsRequest {
        let mut request = self.start(service_id::RESPONSE_ON_EVENT);
        request.push(event_type).push(event_window_time);
        if let Some(record) = event_type_record {
            request.extend(record);
        }
        if let Some(record) = service_to_respond_to_record {
            request.extend(record);
        }
        Self::finish(request)
    }

    /// LinkControl (0x87)
    ///
    /// `mode_identifier` is the linkControlModeIdentifier of a fixed-parameter
    /// verification, `link_record` the 3-byte linkRecord of a specific one.
    pub fn link_control(
        &self,
        control_type: u8,
        mode_identifier: Option<u8>,
        link_record: Option<u32>,
    ) -> Result<UdsRequest, RequestError> {
        let mut request = self.start(service_id::LINK_CONTROL);
        request.push(control_type);
        if let Some(mode) = mode_identifier {
            request.push(mode);
        }
        if let Some(record) = link_record {
            request.extend(&encode_sized("linkRecord", u64::from(record), 3)?);
        }
        Ok(Self::finish(request))
    }

    // =========================================================================
    // Data transmission
    // =========================================================================

    /// ReadDataByIdentifier (0x22)
    pub fn read_data_by_identifier(&self, dids: &[u16]) -> Result<UdsRequest, RequestError> {
        if dids.is_empty() {
            return Err(RequestError::InvalidArgument(
                "at least one data identifier is required".to_string(),
            ));
        }
        let mut request = self.start(service_id::READ_DATA_BY_ID);
        for did in dids {
            request.push_u16(*did);
        }
        Ok(Self::finish(request))
    }

    /// ReadMemoryByAddress (0x23)
    pub fn read_memory_by_address(
        &self,
        alfid: u8,
        address: u64,
        size: u64,
    ) -> Result<UdsRequest, RequestError> {
        let format = AddressAndLengthFormat::from_byte(alfid)?;
        let mut request = self.start(service_id::READ_MEMORY_BY_ADDRESS);
        request.push(alfid).extend(&format.encode(address, size)?);
        Ok(Self::finish(request))
    }

    /// ReadScalingDataByIdentifier (0x24)
    pub fn read_scaling_data_by_identifier(&self, did: u16) -> UdsRequest {
        let mut request = self.start(service_id::READ_SCALING_DATA_BY_ID);
        request.push_u16(did);
        Self::finish(request)
    }

    /// ReadDataByPeriodicIdentifier (0x2A)
    ///
    /// Periodic identifiers are the low byte of DIDs 0xF2xx. An empty list with
    /// stopSending stops every periodic transmission.
    pub fn read_data_by_periodic_identifier(
        &self,
        mode: u8,
        periodic_ids: &[u8],
    ) -> Result<UdsRequest, RequestError> {
        let sending_rate = matches!(
            mode,
            transmission_mode::SEND_AT_SLOW_RATE
                | transmission_mode::SEND_AT_MEDIUM_RATE
                | transmission_mode::SEND_AT_FAST_RATE
        );
        if sending_rate && periodic_ids.is_empty() {
            return Err(RequestError::InvalidArgument(format!(
                "transmissionMode 0x{mode:02X} needs at least one periodic identifier"
            )));
        }
        let mut request = self.start(service_id::READ_DATA_BY_PERIODIC_ID);
        request.push(mode).extend(periodic_ids);
        Ok(Self::finish(request))
    }

    /// DynamicallyDefineDataIdentifier (0x2C)
    pub fn dynamically_define_data_identifier(
        &self,
        definition: &DynamicDefinition,
    ) -> Result<UdsRequest, RequestError> {
        let mut request = self.start(service_id::DYNAMICALLY_DEFINE_DATA_ID);

        match definition {
            DynamicDefinition::ByIdentifier { did, sources } => {
                if sources.is_empty() {
                    return Err(RequestError::InvalidArgument(
                        "defineByIdentifier needs at least one source DID".to_string(),
                    ));
                }
                request
                    .push(definition_type::DEFINE_BY_IDENTIFIER)
                    .push_u16(*did);
                for source in sources {
                    if source.position == 0 {
                        return Err(RequestError::InvalidArgument(format!(
                            "position in source DID 0x{:04X} is 1-based",
                            source.did
                        )));
                    }
                    request
                        .push_u16(source.did)
                        .push(source.position)
                        .push(source.memory_size);
                }
            }
            DynamicDefinition::ByMemoryAddress {
                did,
                alfid,
                regions,
            } => {
                if regions.is_empty() {
                    return Err(RequestError::InvalidArgument(
                        "defineByMemoryAddress needs at least one memory region".to_string(),
                    ));
                }
                let format = AddressAndLengthFormat::from_byte(*alfid)?;
                request
                    .push(definition_type::DEFINE_BY_MEMORY_ADDRESS)
                    .push_u16(*did)
                    .push(*alfid);
                for region in regions {
                    request.extend(&format.encode(region.address, region.size)?);
                }
            }
            DynamicDefinition::Clear { did } => {
                request.push(definition_type::CLEAR_DYNAMICALLY_DEFINED_DATA_IDENTIFIER);
                if let Some(did) = did {
                    request.push_u16(*did);
                }
            }
        }

        Ok(Self::finish(request))
    }

    /// WriteDataByIdentifier (0x2E)
    pub fn write_data_by_identifier(&self, did: u16, data_record: &[u8]) -> UdsRequest {
        let mut request = self.start(service_id::WRITE_DATA_BY_ID);
        request.push_u16(did).extend(data_record);
        Self::finish(request)
    }

    /// WriteMemoryByAddress (0x3D)
    pub fn write_memory_by_address(
        &self,
        alfid: u8,
        address: u64,
        data_record: &[u8],
    ) -> Result<UdsRequest, RequestError> {
        if data_record.is_empty() {
            return Err(RequestError::InvalidArgument(
                "data record must not be empty".to_string(),
            ));
        }
        let format = AddressAndLengthFormat::from_byte(alfid)?;
        let mut request = self.start(service_id::WRITE_MEMORY_BY_ADDRESS);
        request
            .push(alfid)
            .extend(&format.encode(address, data_record.len() as u64)?)
            .extend(data_record);
        Ok(Self::finish(request))
    }

    // =========================================================================
    // Stored data transmission
    // =========================================================================

    /// ClearDiagnosticInformation (0x14)
    pub fn clear_diagnostic_information(&self, group_of_dtc: u32) -> Result<UdsRequest, RequestError> {
        let mut request = self.start(service_id::CLEAR_DIAGNOSTIC_INFO);
        request.extend(&encode_sized("groupOfDTC", u64::from(group_of_dtc), 3)?);
        Ok(Self::finish(request))
    }

    /// ClearDiagnosticInformation (0x14) for a user-defined DTC memory
    pub fn clear_diagnostic_information_in_memory(
        &self,
        group_of_dtc: u32,
        memory_selection: u8,
    ) -> Result<UdsRequest, RequestError> {
        let mut request = self.start(service_id::CLEAR_DIAGNOSTIC_INFO);
        request
            .extend(&encode_sized("groupOfDTC", u64::from(group_of_dtc), 3)?)
            .push(memory_selection);
        Ok(Self::finish(request))
    }

    /// ReadDTCInformation (0x19)
    ///
    /// `arguments` are the report type specific parameters (status mask,
    /// DTC number, record number, ...) already laid out as bytes.
    pub fn read_dtc_information(&self, report_type: u8, arguments: &[u8]) -> UdsRequest {
        let mut request = self.start(service_id::READ_DTC_INFO);
        request.push(report_type).extend(arguments);
        Self::finish(request)
    }

    // =========================================================================
    // Input/output control
    // =========================================================================

    /// InputOutputControlByIdentifier (0x2F)
    pub fn input_output_control_by_identifier(
        &self,
        did: u16,
        control_option_record: &[u8],
        control_enable_mask_record: Option<&[u8]>,
    ) -> Result<UdsRequest, RequestError> {
        if control_option_record.is_empty() {
            return Err(RequestError::InvalidArgument(
                "control option record must contain the control parameter".to_string(),
            ));
        }
        let mut request = self.start(service_id::IO_CONTROL_BY_ID);
        request.push_u16(did).extend(control_option_record);
        if let Some(mask) = control_enable_mask_record {
            request.extend(mask);
        }
        Ok(Self::finish(request))
    }

    // =========================================================================
    // Remote activation of routine
    // =========================================================================

    /// RoutineControl (0x31)
    pub fn routine_control(
        &self,
        control_type: u8,
        routine_id: u16,
        option_record: Option<&[u8]>,
    ) -> UdsRequest {
        let mut request = self.start(service_id::ROUTINE_CONTROL);
        request.push(control_type).push_u16(routine_id);
        if let Some(record) = option_record {
            request.extend(record);
        }
        Self::finish(request)
    }

    // =========================================================================
    // Upload/download
    // =========================================================================

    /// RequestDownload (0x34)
    pub fn request_download(
        &self,
        data_format: u8,
        alfid: u8,
        address: u64,
        size: u64,
    ) -> Result<UdsRequest, RequestError> {
        self.transfer_request(service_id::REQUEST_DOWNLOAD, data_format, alfid, address, size)
    }

    /// RequestUpload (0x35)
    pub fn request_upload(
        &self,
        data_format: u8,
        alfid: u8,
        address: u64,
        size: u64,
    ) -> Result<UdsRequest, RequestError> {
        self.transfer_request(service_id::REQUEST_UPLOAD, data_format, alfid, address, size)
    }

    fn transfer_request(
        &self,
        service: u8,
        data_format: u8,
        alfid: u8,
        address: u64,
        size: u64,
    ) -> Result<UdsRequest, RequestError> {
        let format = AddressAndLengthFormat::from_byte(alfid)?;
        let mut request = self.start(service);
        request
            .push(data_format)
            .push(alfid)
            .extend(&format.encode(address, size)?);
        Ok(Self::finish(request))
    }

    /// TransferData (0x36)
    pub fn transfer_data(&self, block_sequence_counter: u8, parameter_record: &[u8]) -> UdsRequest {
        let mut request = self.start(service_id::TRANSFER_DATA);
        request.push(block_sequence_counter).extend(parameter_record);
        Self::finish(request)
    }

    /// RequestTransferExit (0x37)
    pub fn request_transfer_exit(&self, parameter_record: Option<&[u8]>) -> UdsRequest {
        let mut request = self.start(service_id::REQUEST_TRANSFER_EXIT);
        if let Some(record) = parameter_record {
            request.extend(record);
        }
        Self::finish(request)
    }

    /// RequestFileTransfer (0x38)
    pub fn request_file_transfer(&self, transfer: &FileTransfer) -> Result<UdsRequest, RequestError> {
        let path_len = u16::try_from(transfer.path.len()).map_err(|_| {
            RequestError::InvalidArgument(format!(
                "file path is {} bytes, limit is {}",
                transfer.path.len(),
                u16::MAX
            ))
        })?;
        if path_len == 0 {
            return Err(RequestError::InvalidArgument(
                "file path must not be empty".to_string(),
            ));
        }

        let (wants_format, wants_size) = match transfer.mode {
            file_operation_mode::DELETE_FILE | file_operation_mode::READ_DIR => (false, false),
            file_operation_mode::READ_FILE => (true, false),
            file_operation_mode::ADD_FILE
            | file_operation_mode::REPLACE_FILE
            | file_operation_mode::RESUME_FILE => (true, true),
            other => {
                return Err(RequestError::InvalidArgument(format!(
                    "unknown modeOfOperation 0x{other:02X}"
                )))
            }
        };

        let mut request = self.start(service_id::REQUEST_FILE_TRANSFER);
        request
            .push(transfer.mode)
            .push_u16(path_len)
            .extend(&transfer.path);

        match (wants_format, transfer.data_format) {
            (true, Some(format)) => {
                request.push(format);
            }
            (true, None) => {
                return Err(RequestError::InvalidArgument(format!(
                    "modeOfOperation 0x{:02X} requires a dataFormatIdentifier",
                    transfer.mode
                )))
            }
            (false, Some(_)) => {
                return Err(RequestError::InvalidArgument(format!(
                    "modeOfOperation 0x{:02X} takes no dataFormatIdentifier",
                    transfer.mode
                )))
            }
            (false, None) => {}
        }

        match (wants_size, transfer.file_size) {
            (true, Some(size)) => {
                let len = size.parameter_length as usize;
                request
                    .push(size.parameter_length)
                    .extend(&encode_sized("fileSizeUnCompressed", size.uncompressed, len)?)
                    .extend(&encode_sized("fileSizeCompressed", size.compressed, len)?);
            }
            (true, None) => {
                return Err(RequestError::InvalidArgument(format!(
                    "modeOfOperation 0x{:02X} requires file sizes",
                    transfer.mode
                )))
            }
            (false, Some(_)) => {
                return Err(RequestError::InvalidArgument(format!(
                    "modeOfOperation 0x{:02X} takes no file sizes",
                    transfer.mode
                )))
            }
            (false, None) => {}
        }

        Ok(Self::finish(request))
    }
}

fn check_security_level(level: u8) -> Result<(), RequestError> {
    if level == 0 || level > MAX_SECURITY_LEVEL {
        return Err(RequestError::InvalidArgument(format!(
            "security level must be 1..={MAX_SECURITY_LEVEL}, got {level}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceOverrides;
    use crate::sub_function::*;
    use pretty_assertions::assert_eq;

    fn hex(request: UdsRequest) -> String {
        request.to_string()
    }

    #[test]
    fn test_session_and_reset() {
        let b = RequestBuilder::new();
        assert_eq!(hex(b.diagnostic_session_control(session_type::EXTENDED_SESSION)), "10 03");
        assert_eq!(hex(b.ecu_reset(reset_type::SOFT_RESET)), "11 03");
    }

    #[test]
    fn test_security_access() {
        let b = RequestBuilder::new();
        assert_eq!(hex(b.security_access(0x01, None)), "27 01");
        assert_eq!(
            hex(b.security_access(0x02, Some(&[0xDE, 0xAD, 0xBE, 0xEF]))),
            "27 02 DE AD BE EF"
        );
        assert_eq!(hex(b.security_access_request_seed(3).unwrap()), "27 05");
        assert_eq!(hex(b.security_access_send_key(3, &[0x12, 0x34]).unwrap()), "27 06 12 34");
    }

    #[test]
    fn test_security_access_rejects_bad_level() {
        let b = RequestBuilder::new();
        assert!(b.security_access_request_seed(0).is_err());
        assert!(b.security_access_request_seed(0x40).is_err());
        assert!(b.security_access_send_key(1, &[]).is_err());
    }

    #[test]
    fn test_communication_control_node_id_is_two_bytes() {
        let b = RequestBuilder::new();
        assert_eq!(hex(b.communication_control(0x03, 0x01, None)), "28 03 01");
        assert_eq!(
            hex(b.communication_control(0x05, 0x01, Some(0x0A05))),
            "28 05 01 0A 05"
        );
    }

    #[test]
    fn test_tester_present_and_timing() {
        let b = RequestBuilder::new();
        assert_eq!(hex(b.tester_present(tester_present::ZERO_SUB_FUNCTION)), "3E 00");
        assert_eq!(hex(b.access_timing_parameter(0x03, None)), "83 03");
        assert_eq!(
            hex(b.access_timing_parameter(0x04, Some(&[0x00, 0x32, 0x01, 0xF4]))),
            "83 04 00 32 01 F4"
        );
    }

    #[test]
    fn test_secured_data_and_dtc_setting() {
        let b = RequestBuilder::new();
        assert_eq!(hex(b.secured_data_transmission(&[0x01, 0x02])), "84 01 02");
        assert_eq!(hex(b.control_dtc_setting(dtc_setting_type::OFF, None)), "85 02");
        assert_eq!(
            hex(b.control_dtc_setting(dtc_setting_type::ON, Some(&[0xFF, 0xFF, 0xFF]))),
            "85 01 FF FF FF"
        );
    }

    #[test]
    fn test_response_on_event() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b.response_on_event(
                event_type::STORE_EVENT | event_type::ON_DTC_STATUS_CHANGE,
                0x02,
                Some(&[0x08]),
                Some(&[0x19, 0x0E]),
            )),
            "86 41 02 08 19 0E"
        );
        assert_eq!(hex(b.response_on_event(0x00, 0x00, None, None)), "86 00 00");
    }

    #[test]
    fn test_link_control() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b
                .link_control(link_control_type::VERIFY_MODE_TRANSITION_WITH_FIXED_PARAMETER, Some(link_baud_rate::CAN_500K), None)
                .unwrap()),
            "87 01 12"
        );
        assert_eq!(
            hex(b.link_control(0x02, None, Some(0x07A120)).unwrap()),
            "87 02 07 A1 20"
        );
        assert!(b.link_control(0x02, None, Some(0x0100_0000)).is_err());
    }

    #[test]
    fn test_read_data_by_identifier_pads_both_bytes() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b.read_data_by_identifier(&[0xF190, 0x0102]).unwrap()),
            "22 F1 90 01 02"
        );
        assert!(b.read_data_by_identifier(&[]).is_err());
    }

    #[test]
    fn test_read_memory_by_address() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b.read_memory_by_address(0x24, 0x2000_1000, 0x0010).unwrap()),
            "23 24 20 00 10 00 00 10"
        );
        assert_eq!(
            b.read_memory_by_address(0x00, 0, 0),
            Err(RequestError::InvalidFormatIdentifier(0x00))
        );
    }

    #[test]
    fn test_scaling_and_periodic() {
        let b = RequestBuilder::new();
        assert_eq!(hex(b.read_scaling_data_by_identifier(0x0105)), "24 01 05");
        assert_eq!(
            hex(b
                .read_data_by_periodic_identifier(transmission_mode::SEND_AT_FAST_RATE, &[0xE3, 0x24])
                .unwrap()),
            "2A 03 E3 24"
        );
        assert_eq!(
            hex(b
                .read_data_by_periodic_identifier(transmission_mode::STOP_SENDING, &[])
                .unwrap()),
            "2A 04"
        );
        assert!(matches!(
            b.read_data_by_periodic_identifier(transmission_mode::SEND_AT_SLOW_RATE, &[]),
            Err(RequestError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_dddi_by_identifier() {
        let b = RequestBuilder::new();
        let definition = DynamicDefinition::ByIdentifier {
            did: 0xF301,
            sources: vec![
                SourceDataIdentifier {
                    did: 0x1234,
                    position: 1,
                    memory_size: 2,
                },
                SourceDataIdentifier {
                    did: 0x5678,
                    position: 3,
                    memory_size: 1,
                },
            ],
        };
        assert_eq!(
            hex(b.dynamically_define_data_identifier(&definition).unwrap()),
            "2C 01 F3 01 12 34 01 02 56 78 03 01"
        );
    }

    #[test]
    fn test_dddi_by_memory_address_writes_alfid_once() {
        let b = RequestBuilder::new();
        let definition = DynamicDefinition::ByMemoryAddress {
            did: 0xF302,
            alfid: 0x14,
            regions: vec![
                MemoryRegion {
                    address: 0x2100_0000,
                    size: 0x04,
                },
                MemoryRegion {
                    address: 0x2100_0010,
                    size: 0x02,
                },
            ],
        };
        assert_eq!(
            hex(b.dynamically_define_data_identifier(&definition).unwrap()),
            "2C 02 F3 02 14 21 00 00 00 04 21 00 00 10 02"
        );
    }

    #[test]
    fn test_dddi_clear() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b
                .dynamically_define_data_identifier(&DynamicDefinition::Clear { did: Some(0xF301) })
                .unwrap()),
            "2C 03 F3 01"
        );
        assert_eq!(
            hex(b
                .dynamically_define_data_identifier(&DynamicDefinition::Clear { did: None })
                .unwrap()),
            "2C 03"
        );
    }

    #[test]
    fn test_dddi_rejects_empty_definitions() {
        let b = RequestBuilder::new();
        assert!(b
            .dynamically_define_data_identifier(&DynamicDefinition::ByIdentifier {
                did: 0xF301,
                sources: vec![],
            })
            .is_err());
        assert!(b
            .dynamically_define_data_identifier(&DynamicDefinition::ByMemoryAddress {
                did: 0xF301,
                alfid: 0x14,
                regions: vec![],
            })
            .is_err());
    }

    #[test]
    fn test_write_services() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b.write_data_by_identifier(0xF190, b"WVW")),
            "2E F1 90 57 56 57"
        );
        assert_eq!(
            hex(b.write_memory_by_address(0x12, 0x2048, &[0x00, 0x8C]).unwrap()),
            "3D 12 20 48 02 00 8C"
        );
        assert!(b.write_memory_by_address(0x12, 0x2048, &[]).is_err());
    }

    #[test]
    fn test_clear_diagnostic_information() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b.clear_diagnostic_information(dtc_group::ALL).unwrap()),
            "14 FF FF FF"
        );
        assert_eq!(
            hex(b.clear_diagnostic_information(dtc_group::POWERTRAIN).unwrap()),
            "14 00 00 00"
        );
        assert_eq!(
            hex(b.clear_diagnostic_information_in_memory(dtc_group::ALL, 0x10).unwrap()),
            "14 FF FF FF 10"
        );
        assert!(b.clear_diagnostic_information(0x0100_0000).is_err());
    }

    #[test]
    fn test_read_dtc_information() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b.read_dtc_information(dtc_report_type::REPORT_DTC_BY_STATUS_MASK, &[0x09])),
            "19 02 09"
        );
        assert_eq!(
            hex(b.read_dtc_information(dtc_report_type::REPORT_SUPPORTED_DTC, &[])),
            "19 0A"
        );
    }

    #[test]
    fn test_io_control() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b
                .input_output_control_by_identifier(
                    0x9B00,
                    &[io_control_option::SHORT_TERM_ADJUSTMENT, 0x3C],
                    Some(&[0xFF]),
                )
                .unwrap()),
            "2F 9B 00 03 3C FF"
        );
        assert_eq!(
            hex(b
                .input_output_control_by_identifier(0x9B00, &[io_control_option::RETURN_CONTROL_TO_ECU], None)
                .unwrap()),
            "2F 9B 00 00"
        );
        assert!(b.input_output_control_by_identifier(0x9B00, &[], None).is_err());
    }

    #[test]
    fn test_routine_control() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b.routine_control(routine_control_type::START_ROUTINE, 0xFF00, Some(&[0x01]))),
            "31 01 FF 00 01"
        );
        assert_eq!(
            hex(b.routine_control(routine_control_type::REQUEST_ROUTINE_RESULTS, 0x0203, None)),
            "31 03 02 03"
        );
    }

    #[test]
    fn test_download_upload() {
        let b = RequestBuilder::new();
        assert_eq!(
            hex(b.request_download(0x00, 0x44, 0x0800_0000, 0x0002_0000).unwrap()),
            "34 00 44 08 00 00 00 00 02 00 00"
        );
        assert_eq!(
            hex(b.request_upload(0x11, 0x33, 0x20_0000, 0x100).unwrap()),
            "35 11 33 20 00 00 00 01 00"
        );
        assert!(b.request_download(0x00, 0x11, 0x100, 0x10).is_err());
    }

    #[test]
    fn test_transfer_data_and_exit() {
        let b = RequestBuilder::new();
        assert_eq!(hex(b.transfer_data(0x01, &[0xAA, 0xBB])), "36 01 AA BB");
        assert_eq!(hex(b.request_transfer_exit(None)), "37");
        assert_eq!(hex(b.request_transfer_exit(Some(&[0xC3, 0x5A]))), "37 C3 5A");
    }

    #[test]
    fn test_file_transfer_add_file() {
        let b = RequestBuilder::new();
        let transfer = FileTransfer::new(file_operation_mode::ADD_FILE, "/a.bin")
            .with_data_format(0x00)
            .with_file_size(FileSize {
                parameter_length: 2,
                uncompressed: 0x0400,
                compressed: 0x0200,
            });
        assert_eq!(
            hex(b.request_file_transfer(&transfer).unwrap()),
            "38 01 00 06 2F 61 2E 62 69 6E 00 02 04 00 02 00"
        );
    }

    #[test]
    fn test_file_transfer_path_only_modes() {
        let b = RequestBuilder::new();
        let delete = FileTransfer::new(file_operation_mode::DELETE_FILE, "/x");
        assert_eq!(hex(b.request_file_transfer(&delete).unwrap()), "38 02 00 02 2F 78");

        let read = FileTransfer::new(file_operation_mode::READ_FILE, "/x").with_data_format(0x11);
        assert_eq!(hex(b.request_file_transfer(&read).unwrap()), "38 04 00 02 2F 78 11");
    }

    #[test]
    fn test_file_transfer_validation() {
        let b = RequestBuilder::new();
        assert!(b
            .request_file_transfer(&FileTransfer::new(file_operation_mode::ADD_FILE, "/x"))
            .is_err());
        assert!(b
            .request_file_transfer(
                &FileTransfer::new(file_operation_mode::READ_DIR, "/").with_data_format(0x00)
            )
            .is_err());
        assert!(b
            .request_file_transfer(&FileTransfer::new(file_operation_mode::DELETE_FILE, ""))
            .is_err());
        assert!(b
            .request_file_transfer(&FileTransfer::new(0x09, "/x"))
            .is_err());
    }

    #[test]
    fn test_overrides_flow_into_requests() {
        let ids = ServiceIds::from_overrides(&ServiceOverrides {
            read_data_by_id: Some(0xA2),
            ..Default::default()
        });
        let b = RequestBuilder::with_service_ids(ids);
        assert_eq!(hex(b.read_data_by_identifier(&[0xF190]).unwrap()), "A2 F1 90");
        assert_eq!(hex(b.ecu_reset(0x01)), "11 01");
    }

    #[test]
    fn test_overridden_sid_keeps_sub_function() {
        let ids = ServiceIds::from_overrides(&ServiceOverrides {
            tester_present: Some(0xBE),
            read_data_by_id: Some(0x31),
            ..Default::default()
        });
        let b = RequestBuilder::with_service_ids(ids);

        let keep_alive = b
            .tester_present(tester_present::ZERO_SUB_FUNCTION)
            .suppress_positive_response()
            .unwrap();
        assert_eq!(hex(keep_alive.clone()), "BE 80");
        assert_eq!(keep_alive.sub_function(), Some(0x00));

        let report = keep_alive.report();
        assert_eq!(report.service, "TesterPresent");
        assert_eq!(report.sid, 0xBE);
        assert!(report.suppress_positive_response);

        let rdbi = b.read_data_by_identifier(&[0x0190]).unwrap();
        assert_eq!(hex(rdbi.clone()), "31 01 90");
        assert_eq!(rdbi.sub_function(), None);
        assert_eq!(rdbi.report().service, "ReadDataByIdentifier");
        assert_eq!(
            rdbi.suppress_positive_response(),
            Err(RequestError::MissingSubFunction(0x31))
        );
    }
}
