//! Bracket and bracket-table models.
//!
//! This module defines the two bracket types used by the engine
//! ([`CompensationBracket`] and [`RateBracket`]), the ordered, validated
//! [`BracketTable`] collection shared by both, and the [`BracketLookup`]
//! sentinel returned by table lookups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::RoleClass;

/// Common interface of a bracket: a contiguous numeric range with
/// bracket-specific parameters.
pub trait Bracket {
    /// The inclusive lower bound of the range.
    fn lower(&self) -> Decimal;

    /// The inclusive upper bound of the range, or `None` for an open-ended
    /// final bracket.
    fn upper(&self) -> Option<Decimal>;

    /// Checks the bracket's own invariants, returning a description of the
    /// first violation found.
    fn validate(&self) -> Result<(), String>;
}

/// A compensation bracket mapping a revenue range onto salary and bonus
/// bound pairs, differentiated by role class.
///
/// The `employee` pair applies to regular staff, the `patron` pair to the
/// owner/manager class. Within a bracket, salary and bonus are linearly
/// interpolated between the bounds by the compensation resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBracket {
    /// Inclusive lower revenue bound.
    pub min: Decimal,
    /// Inclusive upper revenue bound.
    pub max: Decimal,
    /// Salary at `min` for regular staff.
    pub salary_min_employee: Decimal,
    /// Salary at `max` for regular staff.
    pub salary_max_employee: Decimal,
    /// Salary at `min` for the owner/manager class.
    pub salary_min_patron: Decimal,
    /// Salary at `max` for the owner/manager class.
    pub salary_max_patron: Decimal,
    /// Bonus at `min` for regular staff.
    pub bonus_min_employee: Decimal,
    /// Bonus at `max` for regular staff.
    pub bonus_max_employee: Decimal,
    /// Bonus at `min` for the owner/manager class.
    pub bonus_min_patron: Decimal,
    /// Bonus at `max` for the owner/manager class.
    pub bonus_max_patron: Decimal,
}

impl CompensationBracket {
    /// Returns the `(min, max)` salary bounds for the given role class.
    pub fn salary_bounds(&self, role: RoleClass) -> (Decimal, Decimal) {
        match role {
            RoleClass::Employee => (self.salary_min_employee, self.salary_max_employee),
            RoleClass::Patron => (self.salary_min_patron, self.salary_max_patron),
        }
    }

    /// Returns the `(min, max)` bonus bounds for the given role class.
    pub fn bonus_bounds(&self, role: RoleClass) -> (Decimal, Decimal) {
        match role {
            RoleClass::Employee => (self.bonus_min_employee, self.bonus_max_employee),
            RoleClass::Patron => (self.bonus_min_patron, self.bonus_max_patron),
        }
    }
}

impl Bracket for CompensationBracket {
    fn lower(&self) -> Decimal {
        self.min
    }

    fn upper(&self) -> Option<Decimal> {
        Some(self.max)
    }

    fn validate(&self) -> Result<(), String> {
        if self.min < Decimal::ZERO {
            return Err(format!("min {} is negative", self.min));
        }
        if self.min > self.max {
            return Err(format!("min {} exceeds max {}", self.min, self.max));
        }
        let pairs = [
            ("salary (employee)", self.salary_min_employee, self.salary_max_employee),
            ("salary (patron)", self.salary_min_patron, self.salary_max_patron),
            ("bonus (employee)", self.bonus_min_employee, self.bonus_max_employee),
            ("bonus (patron)", self.bonus_min_patron, self.bonus_max_patron),
        ];
        for (label, lo, hi) in pairs {
            if lo < Decimal::ZERO {
                return Err(format!("{} lower bound {} is negative", label, lo));
            }
            if lo > hi {
                return Err(format!("{} bounds are inverted: {} > {}", label, lo, hi));
            }
        }
        Ok(())
    }
}

/// A rate bracket: a numeric range carrying a percentage rate.
///
/// Used identically for corporate-tax brackets (taxable base = net profit)
/// and wealth brackets (taxable base = declared balance). The final bracket
/// of a table may omit `max` to be open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBracket {
    /// Inclusive lower bound of the taxable range.
    pub min: Decimal,
    /// Inclusive upper bound, or `None` for the open-ended final bracket.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Percentage rate in `[0, 100]` applied to the portion of the base
    /// that falls within this bracket.
    pub rate: Decimal,
}

impl RateBracket {
    /// Returns the width of the bracket, or `None` when open-ended.
    pub fn width(&self) -> Option<Decimal> {
        self.max.map(|max| max - self.min)
    }
}

impl Bracket for RateBracket {
    fn lower(&self) -> Decimal {
        self.min
    }

    fn upper(&self) -> Option<Decimal> {
        self.max
    }

    fn validate(&self) -> Result<(), String> {
        if self.min < Decimal::ZERO {
            return Err(format!("min {} is negative", self.min));
        }
        if let Some(max) = self.max {
            if self.min > max {
                return Err(format!("min {} exceeds max {}", self.min, max));
            }
        }
        if self.rate < Decimal::ZERO || self.rate > Decimal::from(100) {
            return Err(format!("rate {} is outside [0, 100]", self.rate));
        }
        Ok(())
    }
}

/// The result of a [`BracketTable::find`] lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketLookup<'a, T> {
    /// The amount is below the first bracket's lower bound, or the table
    /// is empty.
    BelowRange,
    /// The amount falls within this bracket.
    Within(&'a T),
    /// The amount exceeds the last bracket's upper bound; the last bracket
    /// is carried for clamping.
    AboveRange(&'a T),
}

/// An ordered, validated collection of brackets of one type.
///
/// Brackets are kept in ascending order of their lower bound. An empty
/// table is legal and represents "no configuration available"; every
/// computation degrades to zero results on an empty table rather than
/// failing.
///
/// Validation happens at construction, never at lookup time: [`BracketTable::new`]
/// sorts the brackets by lower bound and then checks each bracket's own
/// invariants. Rate tables destined for progressive accumulation are
/// additionally checked with [`BracketTable::validate_contiguous`] by the
/// configuration loader.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketTable<T> {
    brackets: Vec<T>,
}

impl<T: Bracket> BracketTable<T> {
    /// Builds a validated table from a possibly unordered list of brackets.
    ///
    /// The brackets are sorted ascending by lower bound, then each bracket's
    /// invariants are checked. Only the final bracket may be open-ended.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBracket`] naming the first offending
    /// bracket (by its index after sorting).
    pub fn new(mut brackets: Vec<T>) -> EngineResult<Self> {
        brackets.sort_by(|a, b| a.lower().cmp(&b.lower()));

        for (index, bracket) in brackets.iter().enumerate() {
            bracket
                .validate()
                .map_err(|message| EngineError::InvalidBracket { index, message })?;

            if bracket.upper().is_none() && index + 1 != brackets.len() {
                return Err(EngineError::InvalidBracket {
                    index,
                    message: "only the last bracket may omit an upper bound".to_string(),
                });
            }
        }

        Ok(Self { brackets })
    }

    /// Returns an empty table, the "no configuration available" state.
    pub fn empty() -> Self {
        Self { brackets: Vec::new() }
    }

    /// Returns true if the table holds no brackets.
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Returns the number of brackets in the table.
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[T] {
        &self.brackets
    }

    /// Returns the first (lowest) bracket, if any.
    pub fn first(&self) -> Option<&T> {
        self.brackets.first()
    }

    /// Returns the last (highest) bracket, if any.
    pub fn last(&self) -> Option<&T> {
        self.brackets.last()
    }

    /// Looks up the bracket containing `amount`.
    ///
    /// Returns the first bracket in ascending order whose range contains the
    /// amount. Amounts below the first bracket's lower bound (or any lookup
    /// against an empty table) yield [`BracketLookup::BelowRange`]; amounts
    /// above the last bracket's upper bound yield
    /// [`BracketLookup::AboveRange`] carrying the last bracket. An amount
    /// falling in a gap between brackets attaches to the next bracket;
    /// consumers clamp to that bracket's lower bound.
    pub fn find(&self, amount: Decimal) -> BracketLookup<'_, T> {
        let Some(first) = self.brackets.first() else {
            return BracketLookup::BelowRange;
        };
        if amount < first.lower() {
            return BracketLookup::BelowRange;
        }

        for bracket in &self.brackets {
            match bracket.upper() {
                Some(max) if amount > max => continue,
                _ => return BracketLookup::Within(bracket),
            }
        }

        match self.brackets.last() {
            Some(last) => BracketLookup::AboveRange(last),
            None => BracketLookup::BelowRange,
        }
    }

    /// Checks that the table is contiguous and anchored at zero: the first
    /// bracket starts at `0` and each bracket's lower bound equals the
    /// previous bracket's upper bound.
    ///
    /// Progressive accumulation assumes this shape; a table that fails the
    /// check is a configuration error and must be rejected by the owning
    /// collaborator before any computation runs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NonContiguousBrackets`] naming the first
    /// bracket that breaks contiguity. An empty table is trivially valid.
    pub fn validate_contiguous(&self) -> EngineResult<()> {
        let Some(first) = self.brackets.first() else {
            return Ok(());
        };
        if first.lower() != Decimal::ZERO {
            return Err(EngineError::NonContiguousBrackets {
                index: 0,
                message: format!("first bracket starts at {} instead of 0", first.lower()),
            });
        }

        for (index, window) in self.brackets.windows(2).enumerate() {
            let previous_max = window[0].upper();
            let next_min = window[1].lower();
            match previous_max {
                Some(max) if max == next_min => {}
                Some(max) => {
                    return Err(EngineError::NonContiguousBrackets {
                        index: index + 1,
                        message: format!(
                            "min {} does not equal previous max {}",
                            next_min, max
                        ),
                    });
                }
                // Open-ended non-final brackets are rejected by new(), but
                // keep the check total.
                None => {
                    return Err(EngineError::NonContiguousBrackets {
                        index,
                        message: "open-ended bracket before the end of the table".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
