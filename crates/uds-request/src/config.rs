//! Request builder configuration
//!
//! Loaded from TOML. Only service ID overrides affect the encoded bytes;
//! the output section is consumed by front ends.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sid::ServiceIds;

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UdsRequestConfig {
    /// Service ID overrides for OEM variants
    #[serde(default)]
    pub service_overrides: ServiceOverrides,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

impl UdsRequestConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded request configuration");
        Ok(config)
    }

    /// Service table with this configuration's overrides applied
    pub fn service_ids(&self) -> ServiceIds {
        ServiceIds::from_overrides(&self.service_overrides)
    }
}

/// Output format preference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space separated hex bytes
    #[default]
    Text,
    /// JSON request report
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub no_color: bool,
}

/// Optional per-service SID replacements
///
/// Any field left unset keeps the standard ISO 14229 value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOverrides {
    /// DiagnosticSessionControl (standard: 0x10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_session_control: Option<u8>,
    /// ECUReset (standard: 0x11)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecu_reset: Option<u8>,
    /// SecurityAccess (standard: 0x27)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_access: Option<u8>,
    /// CommunicationControl (standard: 0x28)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_control: Option<u8>,
    /// TesterPresent (standard: 0x3E)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tester_present: Option<u8>,
    /// AccessTimingParameter (standard: 0x83)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_timing_parameter: Option<u8>,
    /// SecuredDataTransmission (standard: 0x84)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secured_data_transmission: Option<u8>,
    /// ControlDTCSetting (standard: 0x85)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_dtc_setting: Option<u8>,
    /// ResponseOnEvent (standard: 0x86)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_on_event: Option<u8>,
    /// LinkControl (standard: 0x87)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_control: Option<u8>,
    /// ReadDataByIdentifier (standard: 0x22)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_data_by_id: Option<u8>,
    /// ReadMemoryByAddress (standard: 0x23)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_memory_by_address: Option<u8>,
    /// ReadScalingDataByIdentifier (standard: 0x24)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_scaling_data_by_id: Option<u8>,
    /// ReadDataByPeriodicIdentifier (standard: 0x2A)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_data_by_periodic_id: Option<u8>,
    /// DynamicallyDefineDataIdentifier (standard: 0x2C)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamically_define_data_id: Option<u8>,
    /// WriteDataByIdentifier (standard: 0x2E)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_data_by_id: Option<u8>,
    /// WriteMemoryByAddress (standard: 0x3D)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_memory_by_address: Option<u8>,
    /// ClearDiagnosticInformation (standard: 0x14)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_diagnostic_info: Option<u8>,
    /// ReadDTCInformation (standard: 0x19)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_dtc_info: Option<u8>,
    /// InputOutputControlByIdentifier (standard: 0x2F)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io_control_by_id: Option<u8>,
    /// RoutineControl (standard: 0x31)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_control: Option<u8>,
    /// RequestDownload (standard: 0x34)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_download: Option<u8>,
    /// RequestUpload (standard: 0x35)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_upload: Option<u8>,
    /// TransferData (standard: 0x36)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<u8>,
    /// RequestTransferExit (standard: 0x37)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_transfer_exit: Option<u8>,
    /// RequestFileTransfer (standard: 0x38)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_file_transfer: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = UdsRequestConfig::from_toml_str("").unwrap();
        assert_eq!(config, UdsRequestConfig::default());
        assert_eq!(config.service_ids(), ServiceIds::default());
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_overrides_and_output() {
        let toml = r#"
[service_overrides]
read_data_by_id = 0xA2
tester_present = 0xBE

[output]
format = "json"
no_color = true
"#;
        let config = UdsRequestConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.service_overrides.read_data_by_id, Some(0xA2));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.no_color);

        let ids = config.service_ids();
        assert_eq!(ids.read_data_by_id, 0xA2);
        assert_eq!(ids.tester_present, 0xBE);
        assert_eq!(ids.ecu_reset, 0x11);
    }

    #[test]
    fn test_rejects_out_of_range_sid() {
        let result = UdsRequestConfig::from_toml_str("[service_overrides]\necu_reset = 300\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service_overrides]\nroutine_control = 0xB1").unwrap();

        let config = UdsRequestConfig::load_from(file.path()).unwrap();
        assert_eq!(config.service_ids().routine_control, 0xB1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = UdsRequestConfig::load_from("/nonexistent/uds-request.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
