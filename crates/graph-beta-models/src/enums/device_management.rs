//! Device management and VPN enums.

use std::fmt;
use std::str::FromStr;

use graph_beta_abstractions::{unknown_enum_value, EnumValue, SerializationError};

// ── RunAsAccountType ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunAsAccountType {
    System,
    User,
}

impl RunAsAccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunAsAccountType::System => "system",
            RunAsAccountType::User => "user",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "system" => Ok(RunAsAccountType::System),
            "user" => Ok(RunAsAccountType::User),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for RunAsAccountType {
    const TYPE_NAME: &'static str = "RunAsAccountType";
    const VALUES: &'static [Self] = &[RunAsAccountType::System, RunAsAccountType::User];

    fn as_str(&self) -> &'static str {
        RunAsAccountType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        RunAsAccountType::parse_str(s)
    }
}

impl FromStr for RunAsAccountType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RunAsAccountType::parse_str(s)
    }
}

impl fmt::Display for RunAsAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VpnServerCertificateType ──────────────────────────────────────────────

/// Certificate the VPN server presents to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VpnServerCertificateType {
    Rsa,
    Ecdsa256,
    Ecdsa384,
    Ecdsa521,
}

impl VpnServerCertificateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VpnServerCertificateType::Rsa => "rsa",
            VpnServerCertificateType::Ecdsa256 => "ecdsa256",
            VpnServerCertificateType::Ecdsa384 => "ecdsa384",
            VpnServerCertificateType::Ecdsa521 => "ecdsa521",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "rsa" => Ok(VpnServerCertificateType::Rsa),
            "ecdsa256" => Ok(VpnServerCertificateType::Ecdsa256),
            "ecdsa384" => Ok(VpnServerCertificateType::Ecdsa384),
            "ecdsa521" => Ok(VpnServerCertificateType::Ecdsa521),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for VpnServerCertificateType {
    const TYPE_NAME: &'static str = "VpnServerCertificateType";
    const VALUES: &'static [Self] = &[
        VpnServerCertificateType::Rsa,
        VpnServerCertificateType::Ecdsa256,
        VpnServerCertificateType::Ecdsa384,
        VpnServerCertificateType::Ecdsa521,
    ];

    fn as_str(&self) -> &'static str {
        VpnServerCertificateType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        VpnServerCertificateType::parse_str(s)
    }
}

impl FromStr for VpnServerCertificateType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VpnServerCertificateType::parse_str(s)
    }
}

impl fmt::Display for VpnServerCertificateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VpnTrafficRuleAppType ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VpnTrafficRuleAppType {
    None,
    Desktop,
    Universal,
}

impl VpnTrafficRuleAppType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VpnTrafficRuleAppType::None => "none",
            VpnTrafficRuleAppType::Desktop => "desktop",
            VpnTrafficRuleAppType::Universal => "universal",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "none" => Ok(VpnTrafficRuleAppType::None),
            "desktop" => Ok(VpnTrafficRuleAppType::Desktop),
            "universal" => Ok(VpnTrafficRuleAppType::Universal),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for VpnTrafficRuleAppType {
    const TYPE_NAME: &'static str = "VpnTrafficRuleAppType";
    const VALUES: &'static [Self] = &[
        VpnTrafficRuleAppType::None,
        VpnTrafficRuleAppType::Desktop,
        VpnTrafficRuleAppType::Universal,
    ];

    fn as_str(&self) -> &'static str {
        VpnTrafficRuleAppType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        VpnTrafficRuleAppType::parse_str(s)
    }
}

impl FromStr for VpnTrafficRuleAppType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VpnTrafficRuleAppType::parse_str(s)
    }
}

impl fmt::Display for VpnTrafficRuleAppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VpnTrafficRuleRoutingPolicyType ───────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VpnTrafficRuleRoutingPolicyType {
    None,
    SplitTunnel,
    ForceTunnel,
}

impl VpnTrafficRuleRoutingPolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VpnTrafficRuleRoutingPolicyType::None => "none",
            VpnTrafficRuleRoutingPolicyType::SplitTunnel => "splitTunnel",
            VpnTrafficRuleRoutingPolicyType::ForceTunnel => "forceTunnel",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "none" => Ok(VpnTrafficRuleRoutingPolicyType::None),
            "splitTunnel" => Ok(VpnTrafficRuleRoutingPolicyType::SplitTunnel),
            "forceTunnel" => Ok(VpnTrafficRuleRoutingPolicyType::ForceTunnel),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for VpnTrafficRuleRoutingPolicyType {
    const TYPE_NAME: &'static str = "VpnTrafficRuleRoutingPolicyType";
    const VALUES: &'static [Self] = &[
        VpnTrafficRuleRoutingPolicyType::None,
        VpnTrafficRuleRoutingPolicyType::SplitTunnel,
        VpnTrafficRuleRoutingPolicyType::ForceTunnel,
    ];

    fn as_str(&self) -> &'static str {
        VpnTrafficRuleRoutingPolicyType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        VpnTrafficRuleRoutingPolicyType::parse_str(s)
    }
}

impl FromStr for VpnTrafficRuleRoutingPolicyType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VpnTrafficRuleRoutingPolicyType::parse_str(s)
    }
}

impl fmt::Display for VpnTrafficRuleRoutingPolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DevicePlatformType ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DevicePlatformType {
    Android,
    AndroidForWork,
    IOs,
    MacOs,
    WindowsPhone81,
    Windows81AndLater,
    Windows10AndLater,
    AndroidWorkProfile,
    Unknown,
    AndroidAosp,
    AndroidMobileApplicationManagement,
    IOsMobileApplicationManagement,
    UnknownFutureValue,
}

impl DevicePlatformType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevicePlatformType::Android => "android",
            DevicePlatformType::AndroidForWork => "androidForWork",
            DevicePlatformType::IOs => "iOS",
            DevicePlatformType::MacOs => "macOS",
            DevicePlatformType::WindowsPhone81 => "windowsPhone81",
            DevicePlatformType::Windows81AndLater => "windows81AndLater",
            DevicePlatformType::Windows10AndLater => "windows10AndLater",
            DevicePlatformType::AndroidWorkProfile => "androidWorkProfile",
            DevicePlatformType::Unknown => "unknown",
            DevicePlatformType::AndroidAosp => "androidAOSP",
            DevicePlatformType::AndroidMobileApplicationManagement => "androidMobileApplicationManagement",
            DevicePlatformType::IOsMobileApplicationManagement => "iOSMobileApplicationManagement",
            DevicePlatformType::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "android" => Ok(DevicePlatformType::Android),
            "androidForWork" => Ok(DevicePlatformType::AndroidForWork),
            "iOS" => Ok(DevicePlatformType::IOs),
            "macOS" => Ok(DevicePlatformType::MacOs),
            "windowsPhone81" => Ok(DevicePlatformType::WindowsPhone81),
            "windows81AndLater" => Ok(DevicePlatformType::Windows81AndLater),
            "windows10AndLater" => Ok(DevicePlatformType::Windows10AndLater),
            "androidWorkProfile" => Ok(DevicePlatformType::AndroidWorkProfile),
            "unknown" => Ok(DevicePlatformType::Unknown),
            "androidAOSP" => Ok(DevicePlatformType::AndroidAosp),
            "androidMobileApplicationManagement" => Ok(DevicePlatformType::AndroidMobileApplicationManagement),
            "iOSMobileApplicationManagement" => Ok(DevicePlatformType::IOsMobileApplicationManagement),
            "unknownFutureValue" => Ok(DevicePlatformType::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for DevicePlatformType {
    const TYPE_NAME: &'static str = "DevicePlatformType";
    const VALUES: &'static [Self] = &[
        DevicePlatformType::Android,
        DevicePlatformType::AndroidForWork,
        DevicePlatformType::IOs,
        DevicePlatformType::MacOs,
        DevicePlatformType::WindowsPhone81,
        DevicePlatformType::Windows81AndLater,
        DevicePlatformType::Windows10AndLater,
        DevicePlatformType::AndroidWorkProfile,
        DevicePlatformType::Unknown,
        DevicePlatformType::AndroidAosp,
        DevicePlatformType::AndroidMobileApplicationManagement,
        DevicePlatformType::IOsMobileApplicationManagement,
        DevicePlatformType::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        DevicePlatformType::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        DevicePlatformType::parse_str(s)
    }
}

impl FromStr for DevicePlatformType {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DevicePlatformType::parse_str(s)
    }
}

impl fmt::Display for DevicePlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
