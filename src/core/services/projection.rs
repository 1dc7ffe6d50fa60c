//! Extrapolation of per-meal daily totals over fixed horizons.

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use crate::domain::{Horizon, Nutrients};

/// Values that can be summed and scaled by a number of days.
pub trait Projectable: Copy + Default + Add<Output = Self> + Mul<f64, Output = Self> {}

impl Projectable for f64 {}

impl Projectable for Nutrients {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealProjection<T> {
    pub meal_name: String,
    pub value: T,
}

/// Every meal's daily value multiplied by the horizon length, plus the grand total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Projection<T> {
    pub horizon: Horizon,
    pub per_meal: Vec<MealProjection<T>>,
    pub total: T,
}

impl<T: Projectable> Projection<T> {
    pub fn build<'a, I>(horizon: Horizon, daily: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        let days = f64::from(horizon.days());
        let per_meal: Vec<MealProjection<T>> = daily
            .into_iter()
            .map(|(meal_name, value)| MealProjection {
                meal_name: meal_name.to_string(),
                value: value * days,
            })
            .collect();
        let total = per_meal
            .iter()
            .fold(T::default(), |acc, entry| acc + entry.value);
        Self {
            horizon,
            per_meal,
            total,
        }
    }

    /// One projection per horizon, in `Horizon::ALL` order.
    pub fn for_all_horizons<'a>(daily: &[(&'a str, T)]) -> Vec<Self> {
        Horizon::ALL
            .iter()
            .map(|horizon| Self::build(*horizon, daily.iter().copied()))
            .collect()
    }

    pub fn value_for(&self, meal_name: &str) -> Option<T> {
        self.per_meal
            .iter()
            .find(|entry| entry.meal_name == meal_name)
            .map(|entry| entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_scales_each_meal_by_horizon_days() {
        let daily = [("Breakfast", 3.25_f64), ("Dinner", 7.5)];
        let projections = Projection::for_all_horizons(&daily);
        assert_eq!(projections.len(), 3);
        for projection in &projections {
            let days = f64::from(projection.horizon.days());
            assert_eq!(projection.value_for("Breakfast"), Some(3.25 * days));
            assert_eq!(projection.value_for("Dinner"), Some(7.5 * days));
            assert_eq!(projection.total, 3.25 * days + 7.5 * days);
        }
    }

    #[test]
    fn empty_input_projects_to_zero() {
        let projection = Projection::<Nutrients>::build(Horizon::Month, std::iter::empty());
        assert!(projection.per_meal.is_empty());
        assert_eq!(projection.total, Nutrients::default());
    }
}
