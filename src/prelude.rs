//! Stay pricing prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    breakdown::{AppliedDiscount, BreakdownError, DiscountKind, PriceBreakdown},
    catalog::{CatalogError, RoomCatalog},
    clock::{Clock, FixedClock, SystemClock},
    config::{Configuration, ConfigurationBuilder, ConfigurationError},
    discounts::{DiscountError, EarlyBird, ExtendedStay},
    fixtures::{Fixture, FixtureError},
    pricing::{PricingError, compute_price},
    promotions::{
        PromoCode, PromoDiscount,
        offers::{Offer, OfferError, OfferStatus, PromotionCatalog},
    },
    rooms::{Room, RoomKey, RoomType, UnknownRoomType},
    seasons::Season,
    stays::{Stay, nights_between},
};
