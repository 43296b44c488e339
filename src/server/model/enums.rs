//! Conversions between stored enumerations and their API representations.

use entity::sea_orm_active_enums::{
    AssetStatus, AssetType, DockSize, DockStatus, FeedbackCategory, MaintenanceStatus,
    MaintenanceType, MembershipTier, ServiceRequestPriority, ServiceRequestStatus,
};

use crate::model::{
    asset::{AssetStatusDto, AssetTypeDto},
    customer::MembershipTierDto,
    dock::{DockSizeDto, DockStatusDto},
    feedback::FeedbackCategoryDto,
    maintenance::{MaintenanceStatusDto, MaintenanceTypeDto},
    service_request::{ServiceRequestPriorityDto, ServiceRequestStatusDto},
};

/// Implements `From` in both directions for two enums with identical variant names.
macro_rules! mirror_enum {
    ($stored:ident <=> $dto:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$stored> for $dto {
            fn from(value: $stored) -> Self {
                match value {
                    $($stored::$variant => $dto::$variant,)+
                }
            }
        }

        impl From<$dto> for $stored {
            fn from(value: $dto) -> Self {
                match value {
                    $($dto::$variant => $stored::$variant,)+
                }
            }
        }
    };
}

mirror_enum!(MembershipTier <=> MembershipTierDto { Basic, Silver, Gold, Platinum });
mirror_enum!(DockStatus <=> DockStatusDto { Available, Occupied, Maintenance, OutOfService });
mirror_enum!(DockSize <=> DockSizeDto { Small, Medium, Large, ExtraLarge });
mirror_enum!(ServiceRequestStatus <=> ServiceRequestStatusDto {
    Pending,
    InProgress,
    Completed,
    Cancelled,
});
mirror_enum!(ServiceRequestPriority <=> ServiceRequestPriorityDto { Low, Medium, High, Urgent });
mirror_enum!(FeedbackCategory <=> FeedbackCategoryDto {
    ServiceQuality,
    Facilities,
    Staff,
    Pricing,
    General,
});
mirror_enum!(AssetType <=> AssetTypeDto {
    Dock,
    PowerStation,
    WaterSystem,
    FuelStation,
    Equipment,
    Building,
    Other,
});
mirror_enum!(AssetStatus <=> AssetStatusDto {
    Operational,
    MaintenanceRequired,
    UnderMaintenance,
    OutOfService,
});
mirror_enum!(MaintenanceType <=> MaintenanceTypeDto { Routine, Preventive, Corrective, Emergency });
mirror_enum!(MaintenanceStatus <=> MaintenanceStatusDto {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
});
