//! Closed string enums used by the models.
//!
//! Every enum maps members to wire strings through exhaustive matches in
//! both directions and implements [`EnumValue`](graph_beta_abstractions::EnumValue).

mod access_review;
mod booking;
mod device_management;
mod page;

pub use access_review::AccessReviewTimeoutBehavior;
pub use booking::{BookingStaffRole, DayOfWeek};
pub use device_management::{
    DevicePlatformType, RunAsAccountType, VpnServerCertificateType, VpnTrafficRuleAppType,
    VpnTrafficRuleRoutingPolicyType,
};
pub use page::{
    HorizontalSectionLayoutType, PageLayoutType, PagePromotionType, SectionEmphasisType,
    TitleAreaLayoutType, TitleAreaTextAlignmentType,
};
