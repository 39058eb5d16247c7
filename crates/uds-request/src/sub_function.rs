//! Sub-function and parameter values per UDS service

/// suppressPosRspMsgIndicationBit, bit 7 of the sub-function byte
pub const SUPPRESS_POSITIVE_RESPONSE: u8 = 0x80;

/// DiagnosticSessionControl (0x10) session types
pub mod session_type {
    pub const DEFAULT_SESSION: u8 = 0x01;
    pub const PROGRAMMING_SESSION: u8 = 0x02;
    pub const EXTENDED_SESSION: u8 = 0x03;
    pub const SAFETY_SYSTEM_DIAGNOSTIC_SESSION: u8 = 0x04;
}

/// ECUReset (0x11) reset types
pub mod reset_type {
    /// Complete shutdown and restart of the ECU
    pub const HARD_RESET: u8 = 0x01;
    /// Simulated ignition cycle
    pub const KEY_OFF_ON_RESET: u8 = 0x02;
    /// Application-level restart
    pub const SOFT_RESET: u8 = 0x03;
    pub const ENABLE_RAPID_POWER_SHUTDOWN: u8 = 0x04;
    pub const DISABLE_RAPID_POWER_SHUTDOWN: u8 = 0x05;
}

/// SecurityAccess (0x27) base types; level N uses `2N-1` and `2N`
pub mod security_access_type {
    pub const REQUEST_SEED: u8 = 0x01;
    pub const SEND_KEY: u8 = 0x02;
}

/// CommunicationControl (0x28) control types
pub mod communication_control_type {
    pub const ENABLE_RX_AND_TX: u8 = 0x00;
    pub const ENABLE_RX_AND_DISABLE_TX: u8 = 0x01;
    pub const DISABLE_RX_AND_ENABLE_TX: u8 = 0x02;
    pub const DISABLE_RX_AND_TX: u8 = 0x03;
    pub const ENABLE_RX_AND_DISABLE_TX_WITH_ENHANCED_ADDRESS_INFO: u8 = 0x04;
    pub const ENABLE_RX_AND_TX_WITH_ENHANCED_ADDRESS_INFO: u8 = 0x05;
}

/// TesterPresent (0x3E)
pub mod tester_present {
    pub const ZERO_SUB_FUNCTION: u8 = 0x00;
}

/// AccessTimingParameter (0x83) access types
pub mod timing_parameter_access_type {
    pub const READ_EXTENDED_TIMING_PARAMETER_SET: u8 = 0x01;
    pub const SET_TIMING_PARAMETERS_TO_DEFAULT_VALUE: u8 = 0x02;
    pub const READ_CURRENTLY_ACTIVE_TIMING_PARAMETERS: u8 = 0x03;
    pub const SET_TIMING_PARAMETERS_TO_GIVEN_VALUES: u8 = 0x04;
}

/// ControlDTCSetting (0x85) setting types
pub mod dtc_setting_type {
    pub const ON: u8 = 0x01;
    pub const OFF: u8 = 0x02;
}

/// ResponseOnEvent (0x86) event types
pub mod event_type {
    /// storageState bit (bit 6); clear means do not store the event
    pub const STORE_EVENT: u8 = 0x40;
    pub const DO_NOT_STORE_EVENT: u8 = 0x00;

    pub const STOP_RESPONSE_ON_EVENT: u8 = 0x00;
    pub const ON_DTC_STATUS_CHANGE: u8 = 0x01;
    pub const ON_TIMER_INTERRUPT: u8 = 0x02;
    pub const ON_CHANGE_OF_DATA_IDENTIFIER: u8 = 0x03;
    pub const REPORT_ACTIVATED_EVENTS: u8 = 0x04;
    pub const START_RESPONSE_ON_EVENT: u8 = 0x05;
    pub const CLEAR_RESPONSE_ON_EVENT: u8 = 0x06;
    pub const ON_COMPARISON_OF_VALUES: u8 = 0x07;
}

/// LinkControl (0x87) control types
pub mod link_control_type {
    pub const VERIFY_MODE_TRANSITION_WITH_FIXED_PARAMETER: u8 = 0x01;
    pub const VERIFY_MODE_TRANSITION_WITH_SPECIFIC_PARAMETER: u8 = 0x02;
    pub const TRANSITION_MODE: u8 = 0x03;
}

/// LinkControl (0x87) fixed baud rate mode identifiers
pub mod link_baud_rate {
    pub const CAN_125K: u8 = 0x10;
    pub const CAN_250K: u8 = 0x11;
    pub const CAN_500K: u8 = 0x12;
    pub const CAN_1M: u8 = 0x13;
}

/// DynamicallyDefineDataIdentifier (0x2C) definition types
pub mod definition_type {
    pub const DEFINE_BY_IDENTIFIER: u8 = 0x01;
    pub const DEFINE_BY_MEMORY_ADDRESS: u8 = 0x02;
    pub const CLEAR_DYNAMICALLY_DEFINED_DATA_IDENTIFIER: u8 = 0x03;
}

/// ReadDataByPeriodicIdentifier (0x2A) transmission modes
pub mod transmission_mode {
    pub const SEND_AT_SLOW_RATE: u8 = 0x01;
    pub const SEND_AT_MEDIUM_RATE: u8 = 0x02;
    pub const SEND_AT_FAST_RATE: u8 = 0x03;
    pub const STOP_SENDING: u8 = 0x04;
}

/// ReadDTCInformation (0x19) report types
pub mod dtc_report_type {
    pub const REPORT_NUMBER_OF_DTC_BY_STATUS_MASK: u8 = 0x01;
    pub const REPORT_DTC_BY_STATUS_MASK: u8 = 0x02;
    pub const REPORT_DTC_SNAPSHOT_IDENTIFICATION: u8 = 0x03;
    pub const REPORT_DTC_SNAPSHOT_RECORD_BY_DTC_NUMBER: u8 = 0x04;
    pub const REPORT_DTC_STORED_DATA_BY_RECORD_NUMBER: u8 = 0x05;
    pub const REPORT_DTC_EXT_DATA_RECORD_BY_DTC_NUMBER: u8 = 0x06;
    pub const REPORT_NUMBER_OF_DTC_BY_SEVERITY_MASK_RECORD: u8 = 0x07;
    pub const REPORT_DTC_BY_SEVERITY_MASK_RECORD: u8 = 0x08;
    pub const REPORT_SEVERITY_INFORMATION_OF_DTC: u8 = 0x09;
    pub const REPORT_SUPPORTED_DTC: u8 = 0x0A;
    pub const REPORT_FIRST_TEST_FAILED_DTC: u8 = 0x0B;
    pub const REPORT_FIRST_CONFIRMED_DTC: u8 = 0x0C;
    pub const REPORT_MOST_RECENT_TEST_FAILED_DTC: u8 = 0x0D;
    pub const REPORT_MOST_RECENT_CONFIRMED_DTC: u8 = 0x0E;
    pub const REPORT_MIRROR_MEMORY_DTC_BY_STATUS_MASK: u8 = 0x0F;
    pub const REPORT_MIRROR_MEMORY_DTC_EXT_DATA_RECORD_BY_DTC_NUMBER: u8 = 0x10;
    pub const REPORT_NUMBER_OF_MIRROR_MEMORY_DTC_BY_STATUS_MASK: u8 = 0x11;
    pub const REPORT_NUMBER_OF_EMISSION_OBD_DTC_BY_STATUS_MASK: u8 = 0x12;
    pub const REPORT_EMISSION_OBD_DTC_BY_STATUS_MASK: u8 = 0x13;
    pub const REPORT_DTC_FAULT_DETECTION_COUNTER: u8 = 0x14;
    pub const REPORT_DTC_WITH_PERMANENT_STATUS: u8 = 0x15;
    pub const REPORT_DTC_EXT_DATA_RECORD_BY_RECORD_NUMBER: u8 = 0x16;
    pub const REPORT_USER_DEF_MEMORY_DTC_BY_STATUS_MASK: u8 = 0x17;
    pub const REPORT_USER_DEF_MEMORY_DTC_SNAPSHOT_RECORD_BY_DTC_NUMBER: u8 = 0x18;
    pub const REPORT_USER_DEF_MEMORY_DTC_EXT_DATA_RECORD_BY_DTC_NUMBER: u8 = 0x19;
    pub const REPORT_WWH_OBD_DTC_BY_MASK_RECORD: u8 = 0x42;
    pub const REPORT_WWH_OBD_DTC_WITH_PERMANENT_STATUS: u8 = 0x55;
}

/// ClearDiagnosticInformation (0x14) DTC groups
pub mod dtc_group {
    pub const ALL: u32 = 0xFFFFFF;
    /// P codes
    pub const POWERTRAIN: u32 = 0x000000;
    /// C codes
    pub const CHASSIS: u32 = 0x400000;
    /// B codes
    pub const BODY: u32 = 0x800000;
    /// U codes
    pub const NETWORK: u32 = 0xC00000;
}

/// InputOutputControlByIdentifier (0x2F) control parameters
pub mod io_control_option {
    pub const RETURN_CONTROL_TO_ECU: u8 = 0x00;
    pub const RESET_TO_DEFAULT: u8 = 0x01;
    pub const FREEZE_CURRENT_STATE: u8 = 0x02;
    pub const SHORT_TERM_ADJUSTMENT: u8 = 0x03;
}

/// RoutineControl (0x31) control types
pub mod routine_control_type {
    pub const START_ROUTINE: u8 = 0x01;
    pub const STOP_ROUTINE: u8 = 0x02;
    pub const REQUEST_ROUTINE_RESULTS: u8 = 0x03;
}

/// RequestFileTransfer (0x38) modes of operation
pub mod file_operation_mode {
    pub const ADD_FILE: u8 = 0x01;
    pub const DELETE_FILE: u8 = 0x02;
    pub const REPLACE_FILE: u8 = 0x03;
    pub const READ_FILE: u8 = 0x04;
    pub const READ_DIR: u8 = 0x05;
    pub const RESUME_FILE: u8 = 0x06;
}
