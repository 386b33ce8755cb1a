//! Integration tests for promo validation against the bundled `oceanview`
//! fixture set, feeding validated codes into the pricing engine.

use jiff::civil::date;
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use stay_pricing::prelude::*;

fn fixture() -> Result<Fixture<'static>, FixtureError> {
    let mut fixture = Fixture::with_base_path(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"));

    fixture.load_set("oceanview")?;

    Ok(fixture)
}

#[test]
fn validated_code_is_priced_with_the_stay() -> TestResult {
    let fixture = fixture()?;
    let config = fixture.config()?;
    let clock = FixedClock::new(date(2026, 6, 15));

    let room = fixture.rooms().by_code("DLX-201").ok_or("missing room DLX-201")?;
    let stay = Stay::new(date(2026, 7, 15), date(2026, 7, 20), 2);

    let promo = fixture
        .promotions()
        .validate("SUMMER20", 5, room.room_type, clock.today())?;

    let breakdown = compute_price(&stay, Some(room), Some(&promo), &config, &clock)?;

    // 5 x $220 = $1,100, peak x1.30 = $1,430
    assert_eq!(breakdown.adjusted_price(), Money::from_minor(143_000, USD));
    // Early-bird $143 + promo $286
    assert_eq!(breakdown.discount_total(), Money::from_minor(42900, USD));
    // $1,430 + $143 + $25 - $429
    assert_eq!(breakdown.total(), Money::from_minor(116_900, USD));

    Ok(())
}

#[test]
fn codes_match_case_insensitively() -> TestResult {
    let fixture = fixture()?;

    let promo = fixture
        .promotions()
        .validate(" summer20 ", 5, RoomType::Suite, date(2026, 7, 1))?;

    assert_eq!(promo.code(), "SUMMER20");

    Ok(())
}

#[test]
fn offer_restrictions_are_enforced() -> TestResult {
    let fixture = fixture()?;
    let offers = fixture.promotions();
    let today = date(2026, 7, 1);

    assert_eq!(
        offers.validate("NOPE", 5, RoomType::Double, today),
        Err(OfferError::UnknownCode("NOPE".to_string()))
    );
    assert_eq!(
        offers.validate("SPRING10", 5, RoomType::Double, today),
        Err(OfferError::Inactive("SPRING10".to_string()))
    );
    assert_eq!(
        offers.validate("WINTER25", 5, RoomType::Double, today),
        Err(OfferError::NotYetValid {
            code: "WINTER25".to_string(),
            valid_from: date(2026, 12, 1),
        })
    );
    assert_eq!(
        offers.validate("SUMMER20", 5, RoomType::Double, date(2026, 9, 1)),
        Err(OfferError::Expired("SUMMER20".to_string()))
    );
    assert_eq!(
        offers.validate("FAMILY10", 5, RoomType::Family, today),
        Err(OfferError::UsageExhausted {
            code: "FAMILY10".to_string(),
            max_uses: 2,
        })
    );
    assert_eq!(
        offers.validate("LONGSTAY15", 9, RoomType::Double, today),
        Err(OfferError::MinimumNightsNotMet {
            code: "LONGSTAY15".to_string(),
            required: 10,
            nights: 9,
        })
    );
    assert_eq!(
        offers.validate("SUMMER20", 5, RoomType::Single, today),
        Err(OfferError::RoomTypeNotEligible {
            code: "SUMMER20".to_string(),
            room_type: RoomType::Single,
        })
    );

    Ok(())
}

#[test]
fn scheduled_offer_stays_closed_until_activated() -> TestResult {
    let mut fixture = fixture()?;
    let opening = date(2026, 12, 1);

    assert_eq!(
        fixture
            .promotions()
            .validate("WINTER25", 3, RoomType::Deluxe, opening),
        Err(OfferError::Inactive("WINTER25".to_string()))
    );

    let mut offer = fixture
        .promotions()
        .offer("WINTER25")
        .ok_or("missing offer WINTER25")?
        .clone();
    offer.code = "WINTER25B".to_string();
    offer.status = OfferStatus::Active;
    fixture.promotions_mut().insert(offer)?;

    let promo = fixture
        .promotions()
        .validate("WINTER25B", 3, RoomType::Deluxe, opening)?;

    assert_eq!(promo.code(), "WINTER25B");

    Ok(())
}

#[test]
fn fixed_amount_offer_comes_off_the_total() -> TestResult {
    let fixture = fixture()?;
    let config = fixture.config()?;
    let clock = FixedClock::new(date(2026, 1, 20));

    let room = fixture.rooms().by_code("SGL-101").ok_or("missing room SGL-101")?;
    let stay = Stay::new(date(2026, 2, 1), date(2026, 2, 3), 1);

    let promo = fixture
        .promotions()
        .validate("WELCOME50", 2, room.room_type, clock.today())?;

    let without = compute_price(&stay, Some(room), None, &config, &clock)?;
    let with = compute_price(&stay, Some(room), Some(&promo), &config, &clock)?;

    assert_eq!(
        without.total().to_minor_units() - with.total().to_minor_units(),
        5000
    );

    Ok(())
}

#[test]
fn redemptions_count_towards_the_limit() -> TestResult {
    let mut fixture = fixture()?;
    let today = date(2026, 7, 1);

    let mut offer = Offer::new(
        "FLASH5",
        "Flash Sale",
        PromoDiscount::FixedAmount(Money::from_minor(500, USD)),
    );
    offer.max_uses = Some(1);

    let offers = fixture.promotions_mut();
    offers.insert(offer)?;

    offers.validate("FLASH5", 1, RoomType::Double, today)?;
    offers.redeem("flash5")?;

    assert!(matches!(
        offers.validate("FLASH5", 1, RoomType::Double, today),
        Err(OfferError::UsageExhausted { max_uses: 1, .. })
    ));
    assert!(matches!(
        offers.redeem("FLASH5"),
        Err(OfferError::UsageExhausted { .. })
    ));

    Ok(())
}
