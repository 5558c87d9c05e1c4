//! Pattern-driven scanning.
//!
//! The pattern index bounds the loop; each iteration requires input to
//! remain. A digit or letter that fails its test costs one input character
//! (the discard that names the policy) while its pattern position emits
//! nothing. Condition placeholders are the deliberate exception: one with no
//! allow-list left is skipped without spending any input, so conditions are
//! peeked at until satisfied rather than draining the input. Literals use
//! the same pending-segment buffering as the ignore scan.

use super::Mask;
use crate::pattern::{allow_list_contains, Placeholder};

pub(super) fn scan(mask: &Mask, input: &str) -> String {
    let input: Vec<char> = input.chars().collect();
    let mut output = String::new();
    let mut segment = String::new();

    let mut input_ix = 0;
    let mut condition_ix = 0;

    for (expression_ix, &expression_ch) in mask.expression.iter().enumerate() {
        if input_ix >= input.len() {
            break;
        }
        let input_ch = input[input_ix];

        let Some(placeholder) = Placeholder::classify(expression_ch) else {
            if input_ch == expression_ch {
                input_ix += 1;
            }
            segment.push(expression_ch);
            continue;
        };

        let matched = match placeholder {
            Placeholder::Digit => input_ch.is_numeric(),
            Placeholder::Letter => input_ch.is_alphabetic(),
            Placeholder::Condition => {
                let Some(list) = mask.conditions.get(condition_ix) else {
                    // No allow-list left for this placeholder: skip the
                    // pattern position without spending the input character.
                    continue;
                };
                if allow_list_contains(list, input_ch) {
                    condition_ix += 1;
                    true
                } else {
                    false
                }
            }
        };

        if matched {
            segment.push(mask.template_override(expression_ix).unwrap_or(input_ch));
            output.push_str(&segment);
            segment.clear();
        }
        input_ix += 1;
    }

    output
}
