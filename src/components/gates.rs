//! Gate kinds and their truth tables.

use std::fmt;
use std::str::FromStr;

/// Element kind of a circuit node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Source terminal driven from outside the circuit
    Input,
    /// Sink terminal, passes its single input through
    Output,
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Inverter
    Not,
    /// Negated conjunction
    Nand,
    /// Negated disjunction
    Nor,
    /// Odd parity
    Xor,
    /// Even parity
    Xnor,
}

impl GateKind {
    /// All element kinds, terminals first.
    pub const ALL: [GateKind; 9] = [
        GateKind::Input,
        GateKind::Output,
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
        GateKind::Xnor,
    ];

    /// Upper-case name used in level files and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::Xnor => "XNOR",
        }
    }

    /// Parse a kind from its keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_uppercase().as_str() {
            "INPUT" | "IN" => Some(Self::Input),
            "OUTPUT" | "OUT" => Some(Self::Output),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" | "INV" => Some(Self::Not),
            "NAND" => Some(Self::Nand),
            "NOR" => Some(Self::Nor),
            "XOR" => Some(Self::Xor),
            "XNOR" => Some(Self::Xnor),
            _ => None,
        }
    }

    /// True for the two terminal kinds.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Input | Self::Output)
    }

    /// True for kinds that accept any fan-in of two or more.
    pub fn is_n_ary(&self) -> bool {
        matches!(
            self,
            Self::And | Self::Or | Self::Nand | Self::Nor | Self::Xor | Self::Xnor
        )
    }

    /// Fan-in a freshly created element of this kind gets.
    pub fn default_fan_in(&self) -> usize {
        match self {
            Self::Input => 0,
            Self::Output | Self::Not => 1,
            _ => 2,
        }
    }

    /// Whether `num_inputs` is a legal fan-in for this kind.
    pub fn accepts_fan_in(&self, num_inputs: usize) -> bool {
        if self.is_n_ary() {
            num_inputs >= 2
        } else {
            num_inputs == self.default_fan_in()
        }
    }

    /// Human readable fan-in rule, for error messages.
    pub fn fan_in_rule(&self) -> &'static str {
        match self {
            Self::Input => "exactly 0",
            Self::Output | Self::Not => "exactly 1",
            _ => "at least 2",
        }
    }

    /// Compute the output of an element of this kind.
    ///
    /// `value` is only read by [`GateKind::Input`], which has no input slots
    /// and emits whatever was set from outside. Every other kind is a pure
    /// function of `inputs`.
    pub fn transfer(&self, inputs: &[bool], value: bool) -> bool {
        match self {
            Self::Input => value,
            Self::Output => inputs.first().copied().unwrap_or(false),
            Self::And => inputs.iter().all(|&x| x),
            Self::Or => inputs.iter().any(|&x| x),
            Self::Not => !inputs.first().copied().unwrap_or(false),
            Self::Nand => inputs.iter().any(|&x| !x),
            Self::Nor => inputs.iter().all(|&x| !x),
            Self::Xor => count_true(inputs) % 2 == 1,
            Self::Xnor => count_true(inputs) % 2 == 0,
        }
    }
}

fn count_true(inputs: &[bool]) -> usize {
    inputs.iter().filter(|&&x| x).count()
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| format!("unknown gate type '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Rows of a 2-input table in (false,false), (false,true), (true,false), (true,true) order.
    const PAIRS: [[bool; 2]; 4] = [[false, false], [false, true], [true, false], [true, true]];

    fn triples() -> Vec<[bool; 3]> {
        (0..8u8)
            .map(|bits| [bits & 4 != 0, bits & 2 != 0, bits & 1 != 0])
            .collect()
    }

    #[rstest]
    #[case(GateKind::And, [false, false, false, true])]
    #[case(GateKind::Or, [false, true, true, true])]
    #[case(GateKind::Nand, [true, true, true, false])]
    #[case(GateKind::Nor, [true, false, false, false])]
    #[case(GateKind::Xor, [false, true, true, false])]
    #[case(GateKind::Xnor, [true, false, false, true])]
    fn test_two_input_truth_tables(#[case] kind: GateKind, #[case] expected: [bool; 4]) {
        for (row, want) in PAIRS.iter().zip(expected) {
            assert_eq!(kind.transfer(row, false), want, "{kind} {row:?}");
        }
    }

    #[rstest]
    #[case(GateKind::And, [false, false, false, false, false, false, false, true])]
    #[case(GateKind::Or, [false, true, true, true, true, true, true, true])]
    #[case(GateKind::Nand, [true, true, true, true, true, true, true, false])]
    #[case(GateKind::Nor, [true, false, false, false, false, false, false, false])]
    #[case(GateKind::Xor, [false, true, true, false, true, false, false, true])]
    #[case(GateKind::Xnor, [true, false, false, true, false, true, true, false])]
    fn test_three_input_truth_tables(#[case] kind: GateKind, #[case] expected: [bool; 8]) {
        for (row, want) in triples().iter().zip(expected) {
            assert_eq!(kind.transfer(row, false), want, "{kind} {row:?}");
        }
    }

    #[rstest]
    #[case(false, true)]
    #[case(true, false)]
    fn test_not(#[case] input: bool, #[case] expected: bool) {
        assert_eq!(GateKind::Not.transfer(&[input], false), expected);
    }

    #[test]
    fn test_terminals() {
        assert!(GateKind::Input.transfer(&[], true));
        assert!(!GateKind::Input.transfer(&[], false));
        assert!(GateKind::Output.transfer(&[true], false));
        assert!(!GateKind::Output.transfer(&[false], true));
    }

    #[test]
    fn test_fan_in_rules() {
        assert!(GateKind::Input.accepts_fan_in(0));
        assert!(!GateKind::Input.accepts_fan_in(1));
        assert!(GateKind::Not.accepts_fan_in(1));
        assert!(!GateKind::Not.accepts_fan_in(2));
        assert!(GateKind::Xor.accepts_fan_in(5));
        assert!(!GateKind::And.accepts_fan_in(1));
    }

    #[test]
    fn test_keywords_round_trip() {
        for kind in GateKind::ALL {
            assert_eq!(GateKind::from_keyword(kind.as_str()), Some(kind));
        }
        assert_eq!("xnor".parse::<GateKind>(), Ok(GateKind::Xnor));
        assert!("MUX".parse::<GateKind>().is_err());
    }
}
