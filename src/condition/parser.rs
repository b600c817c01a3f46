//! Condition string parser

use crate::condition::ast::{AstNode, ConditionValue, Operator, SingleCondition};
use crate::error::{FinLifeError, Result};

/// Operators in match order: two-character operators first
const OPERATORS: [(&str, Operator); 8] = [
    (">=", Operator::GreaterEqual),
    ("<=", Operator::LessEqual),
    ("!=", Operator::NotEqual),
    (">", Operator::Greater),
    ("<", Operator::Less),
    ("=", Operator::Equal),
    ("?", Operator::IncludesAny),
    ("!", Operator::ExcludesAll),
];

/// Parse a condition string into an AST
pub fn parse(condition: &str) -> Result<AstNode> {
    let condition = condition.trim();
    if condition.is_empty() {
        return Err(FinLifeError::InvalidCondition(
            "Empty condition".to_string(),
        ));
    }

    let tokens = tokenize(condition)?;
    parse_tokens(&tokens)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Condition(String),
    And,
    Or,
    OpenParen,
    CloseParen,
}

fn tokenize(condition: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut paren_depth: i32 = 0;
    let mut bracket_depth: i32 = 0;

    for c in condition.chars() {
        // Inside `[...]` every character belongs to the value list
        if bracket_depth > 0 {
            match c {
                '[' => bracket_depth += 1,
                ']' => bracket_depth -= 1,
                _ => {}
            }
            current.push(c);
            continue;
        }

        let token = match c {
            '[' => {
                bracket_depth += 1;
                current.push(c);
                continue;
            }
            ' ' => None,
            '(' => Some(Token::OpenParen),
            ')' => Some(Token::CloseParen),
            '&' => Some(Token::And),
            '|' => Some(Token::Or),
            _ => {
                current.push(c);
                continue;
            }
        };

        if !current.is_empty() {
            tokens.push(Token::Condition(std::mem::take(&mut current)));
        }

        match token {
            Some(Token::OpenParen) => paren_depth += 1,
            Some(Token::CloseParen) => {
                paren_depth -= 1;
                if paren_depth < 0 {
                    return Err(FinLifeError::InvalidCondition(
                        "Unbalanced parentheses".to_string(),
                    ));
                }
            }
            _ => {}
        }

        if let Some(token) = token {
            tokens.push(token);
        }
    }

    if !current.is_empty() {
        tokens.push(Token::Condition(current));
    }

    if paren_depth != 0 {
        return Err(FinLifeError::InvalidCondition(
            "Unbalanced parentheses".to_string(),
        ));
    }
    if bracket_depth != 0 {
        return Err(FinLifeError::InvalidCondition(
            "Unbalanced brackets".to_string(),
        ));
    }

    Ok(tokens)
}

fn parse_tokens(tokens: &[Token]) -> Result<AstNode> {
    if tokens.is_empty() {
        return Err(FinLifeError::InvalidCondition(
            "Empty token list".to_string(),
        ));
    }

    // Find the lowest precedence operator (OR has lower precedence than AND)
    let mut paren_depth = 0;
    let mut or_pos = None;
    let mut and_pos = None;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => paren_depth += 1,
            Token::CloseParen => paren_depth -= 1,
            Token::Or if paren_depth == 0 => or_pos = Some(i),
            Token::And if paren_depth == 0 && or_pos.is_none() => and_pos = Some(i),
            _ => {}
        }
    }

    if let Some(pos) = or_pos {
        let left = parse_tokens(&tokens[..pos])?;
        let right = parse_tokens(&tokens[pos + 1..])?;
        return Ok(AstNode::Or(Box::new(left), Box::new(right)));
    }

    if let Some(pos) = and_pos {
        let left = parse_tokens(&tokens[..pos])?;
        let right = parse_tokens(&tokens[pos + 1..])?;
        return Ok(AstNode::And(Box::new(left), Box::new(right)));
    }

    if tokens.len() >= 2 {
        if let (Token::OpenParen, Token::CloseParen) = (&tokens[0], &tokens[tokens.len() - 1]) {
            return parse_tokens(&tokens[1..tokens.len() - 1]);
        }
    }

    if tokens.len() == 1 {
        if let Token::Condition(cond) = &tokens[0] {
            return parse_single_condition(cond);
        }
    }

    Err(FinLifeError::InvalidCondition(format!(
        "Cannot parse tokens: {:?}",
        tokens
    )))
}

fn parse_single_condition(condition: &str) -> Result<AstNode> {
    for (op_str, operator) in OPERATORS {
        if let Some(pos) = condition.find(op_str) {
            let property = condition[..pos].trim().to_string();
            if property.is_empty() {
                return Err(FinLifeError::InvalidCondition(format!(
                    "Missing property in: {}",
                    condition
                )));
            }

            let value = parse_value(&condition[pos + op_str.len()..])?;

            return Ok(AstNode::Single(SingleCondition {
                property,
                operator,
                value,
            }));
        }
    }

    Err(FinLifeError::InvalidCondition(format!(
        "No operator found in: {}",
        condition
    )))
}

fn parse_value(value_str: &str) -> Result<ConditionValue> {
    let value_str = value_str.trim();

    if value_str.is_empty() {
        return Err(FinLifeError::InvalidCondition("Missing value".to_string()));
    }

    if let Some(inner) = value_str.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let items: Vec<String> = inner.split(',').map(|s| s.trim().to_string()).collect();
        if items.iter().any(|item| item.is_empty()) {
            return Err(FinLifeError::InvalidCondition(format!(
                "Invalid array: {}",
                value_str
            )));
        }
        return Ok(ConditionValue::Array(items));
    }

    if let Ok(i) = value_str.parse::<i64>() {
        return Ok(ConditionValue::Integer(i));
    }

    if let Ok(f) = value_str.parse::<f64>() {
        return Ok(ConditionValue::Float(f));
    }

    Ok(ConditionValue::String(value_str.to_string()))
}
