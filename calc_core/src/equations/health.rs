//! # Health & Fitness Formulas
//!
//! Body-composition and energy equations. All inputs are metric
//! (kilograms, centimeters, years).
//!
//! ## References
//!
//! - Mifflin MD, St Jeor ST, et al. (1990), Am J Clin Nutr 51:241-247
//! - Hodgdon JA, Beckett MB (1984), U.S. Navy circumference method
//! - WHO BMI classification

/// Kilocalories per gram of carbohydrate (or protein)
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;

/// Body mass index
///
/// # Formula
/// BMI = kg / m²
#[inline]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day
///
/// # Formula
/// - Male:   10·w + 6.25·h − 5·a + 5
/// - Female: 10·w + 6.25·h − 5·a − 161
#[inline]
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: f64, male: bool) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    if male {
        base + 5.0
    } else {
        base - 161.0
    }
}

/// Body fat percentage, U.S. Navy method (male)
///
/// # Formula
/// 495 / (1.0324 − 0.19077·log10(waist − neck) + 0.15456·log10(height)) − 450
#[inline]
pub fn navy_body_fat_male(waist_cm: f64, neck_cm: f64, height_cm: f64) -> f64 {
    495.0 / (1.0324 - 0.19077 * (waist_cm - neck_cm).log10() + 0.15456 * height_cm.log10()) - 450.0
}

/// Body fat percentage, U.S. Navy method (female)
///
/// # Formula
/// 495 / (1.29579 − 0.35004·log10(waist + hip − neck) + 0.22100·log10(height)) − 450
#[inline]
pub fn navy_body_fat_female(waist_cm: f64, hip_cm: f64, neck_cm: f64, height_cm: f64) -> f64 {
    495.0 / (1.29579 - 0.35004 * (waist_cm + hip_cm - neck_cm).log10() + 0.22100 * height_cm.log10())
        - 450.0
}

/// Grams of carbohydrate supplying `share` (decimal) of `calories`
#[inline]
pub fn carb_grams(calories: f64, share: f64) -> f64 {
    calories * share / KCAL_PER_GRAM_CARB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        assert!((bmi(70.0, 175.0) - 22.857).abs() < 0.001);
    }

    #[test]
    fn test_mifflin_st_jeor() {
        // 80 kg, 180 cm, 30 y male: 800 + 1125 - 150 + 5
        assert_eq!(mifflin_st_jeor(80.0, 180.0, 30.0, true), 1780.0);
        assert_eq!(mifflin_st_jeor(80.0, 180.0, 30.0, false), 1614.0);
    }

    #[test]
    fn test_navy_body_fat() {
        let male = navy_body_fat_male(85.0, 38.0, 178.0);
        assert!((male - 16.44).abs() < 0.01);
        let female = navy_body_fat_female(75.0, 100.0, 33.0, 165.0);
        assert!((female - 29.43).abs() < 0.01);
    }
}
