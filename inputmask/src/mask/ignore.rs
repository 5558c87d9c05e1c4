//! Skip-and-retry scanning.
//!
//! Two cursors advance independently: the input cursor moves past every
//! character that fails the current placeholder's test, while the pattern
//! cursor waits at that placeholder until something satisfies it. Literals
//! are buffered in a pending segment and flushed into the output only when
//! a later placeholder matches, so a trailing run of literals with nothing
//! matched after it never appears in the output.

use super::Mask;
use crate::pattern::{allow_list_contains, Placeholder};

pub(super) fn scan(mask: &Mask, input: &str) -> String {
    let input: Vec<char> = input.chars().collect();
    let mut output = String::new();
    // Literals pending since the last matched placeholder.
    let mut segment = String::new();

    let mut input_ix = 0;
    let mut condition_ix = 0;
    let mut expression_ix = 0;

    while expression_ix < mask.expression.len() && input_ix < input.len() {
        let expression_ch = mask.expression[expression_ix];

        let Some(placeholder) = Placeholder::classify(expression_ch) else {
            // A separator present in the input is consumed so it is not
            // counted twice; a missing one is tolerated and inserted anyway.
            if input[input_ix] == expression_ch {
                input_ix += 1;
            }
            segment.push(expression_ch);
            expression_ix += 1;
            continue;
        };

        let input_ch = input[input_ix];
        let matched = match placeholder {
            Placeholder::Digit => input_ch.is_numeric(),
            Placeholder::Letter => input_ch.is_alphabetic(),
            Placeholder::Condition => match mask.conditions.get(condition_ix) {
                Some(list) if allow_list_contains(list, input_ch) => {
                    condition_ix += 1;
                    true
                }
                // Exhausted or unsatisfied allow-list: same treatment as any
                // other mismatch.
                _ => false,
            },
        };

        if !matched {
            // Drop the offending character and retry this pattern position.
            input_ix += 1;
            continue;
        }

        segment.push(mask.template_override(expression_ix).unwrap_or(input_ch));
        output.push_str(&segment);
        segment.clear();

        input_ix += 1;
        expression_ix += 1;
    }

    output
}
