//! Two-input boolean function table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Logic Functions
===============

Each output of the module picks one of five functions of the two (already
inverted) inputs A and B. The set is closed and small, so it is a plain enum
and a match, not a table of function pointers.

Truth Table
-----------

    A B │ PassA PassB  AND   OR   XOR
   ─────┼─────────────────────────────
    0 0 │   0     0     0    0     0
    0 1 │   0     1     0    1     1
    1 0 │   1     0     0    1     1
    1 1 │   1     1     1    1     0

Selector Index
--------------

The panel knob is snapped to an integer, and the integer picks the function:

    0 → PassA   1 → PassB   2 → AND   3 → OR   4 → XOR

Any other integer selects nothing. An output with nothing selected is low
before output inversion, and none of its indicator lights are lit.


Getting NAND, NOR, XNOR
-----------------------

Output inversion after the function turns the table into its complement:

    AND + invert  = NAND
    OR  + invert  = NOR
    XOR + invert  = XNOR

Input inversion before the function gives the De Morgan forms:

    AND with both inputs inverted  = NOR
    OR  with both inputs inverted  = NAND
    AND with only B inverted       = A AND NOT B (inhibit)
*/

/// Selector value meaning "no function selected".
pub const NO_FUNCTION: i32 = -1;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicFunction {
    PassA,
    PassB,
    And,
    Or,
    Xor,
}

impl LogicFunction {
    /// Number of selectable functions.
    pub const COUNT: usize = 5;

    /// All functions in selector order.
    pub const ALL: [LogicFunction; Self::COUNT] = [
        LogicFunction::PassA,
        LogicFunction::PassB,
        LogicFunction::And,
        LogicFunction::Or,
        LogicFunction::Xor,
    ];

    /// Function for a selector index, or `None` outside `0..=4`.
    #[inline]
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(LogicFunction::PassA),
            1 => Some(LogicFunction::PassB),
            2 => Some(LogicFunction::And),
            3 => Some(LogicFunction::Or),
            4 => Some(LogicFunction::Xor),
            _ => None,
        }
    }

    /// Selector index of this function, also its light index within a group.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            LogicFunction::PassA => a,
            LogicFunction::PassB => b,
            LogicFunction::And => a & b,
            LogicFunction::Or => a | b,
            LogicFunction::Xor => a ^ b,
        }
    }

    /// Panel label.
    pub fn label(self) -> &'static str {
        match self {
            LogicFunction::PassA => "A",
            LogicFunction::PassB => "B",
            LogicFunction::And => "AND",
            LogicFunction::Or => "OR",
            LogicFunction::Xor => "XOR",
        }
    }
}

/// Evaluate the function picked by `selector`.
///
/// Out-of-range selectors select nothing and yield `false`.
#[inline]
pub fn evaluate(selector: i32, a: bool, b: bool) -> bool {
    match LogicFunction::from_index(selector) {
        Some(function) => function.apply(a, b),
        None => false,
    }
}
