//! Precedence and associativity of the binary operators

use calc_lexer::Operator;

/// Tie-break rule for operators of equal precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`
    Left,
    /// `a op b op c` groups as `a op (b op c)`
    Right,
}

/// Static facts about one operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// The operator described
    pub operator: Operator,
    /// Binding strength; higher binds tighter
    pub precedence: u8,
    /// How equal-precedence neighbours group
    pub associativity: Associativity,
}

/// Indexed by [`table_index`]. Never mutated.
static OPERATOR_TABLE: [OperatorInfo; 4] = [
    OperatorInfo {
        operator: Operator::Add,
        precedence: 1,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        operator: Operator::Sub,
        precedence: 1,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        operator: Operator::Mul,
        precedence: 2,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        operator: Operator::Div,
        precedence: 2,
        associativity: Associativity::Left,
    },
];

fn table_index(op: Operator) -> usize {
    match op {
        Operator::Add => 0,
        Operator::Sub => 1,
        Operator::Mul => 2,
        Operator::Div => 3,
    }
}

/// Look up precedence and associativity for `op`
pub fn operator_info(op: Operator) -> &'static OperatorInfo {
    &OPERATOR_TABLE[table_index(op)]
}

/// Whether `top`, already on the operator stack, must be applied before
/// `incoming` is pushed.
pub fn binds_before(top: Operator, incoming: Operator) -> bool {
    let top = operator_info(top);
    let incoming = operator_info(incoming);
    match incoming.associativity {
        Associativity::Left => top.precedence >= incoming.precedence,
        Associativity::Right => top.precedence > incoming.precedence,
    }
}
