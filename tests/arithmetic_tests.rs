// Randomised agreement between the parser/evaluator and a reference evaluator

use exprtree::interpreter::errors::RuntimeError;
use exprtree::interpreter::evaluate;
use exprtree::parse;

/// Small deterministic generator so failures are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

const OPS: [char; 4] = ['+', '-', '*', '/'];

fn gen_expr(rng: &mut Lcg, depth: u32, out: &mut String) {
    if depth == 0 || rng.below(3) == 0 {
        out.push_str(&rng.below(10).to_string());
        return;
    }
    if rng.below(4) == 0 {
        out.push('(');
        gen_expr(rng, depth - 1, out);
        out.push(')');
        return;
    }
    gen_expr(rng, depth - 1, out);
    if rng.below(2) == 0 {
        out.push(' ');
    }
    out.push(OPS[rng.below(4) as usize]);
    if rng.below(2) == 0 {
        out.push(' ');
    }
    gen_expr(rng, depth - 1, out);
}

/// Operator-precedence (shunting-yard) evaluation over the raw text.
/// Returns `None` on division by zero.
fn reference_eval(source: &str) -> Option<i128> {
    fn prec(op: char) -> u8 {
        if op == '+' || op == '-' {
            1
        } else {
            2
        }
    }

    fn apply(values: &mut Vec<i128>, op: char) -> Option<()> {
        let b = values.pop()?;
        let a = values.pop()?;
        values.push(match op {
            '+' => a + b,
            '-' => a - b,
            '*' => a * b,
            _ => {
                if b == 0 {
                    return None;
                }
                a / b
            }
        });
        Some(())
    }

    let chars: Vec<char> = source.chars().collect();
    let mut values: Vec<i128> = Vec::new();
    let mut ops: Vec<char> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            let mut n = 0i128;
            while i < chars.len() && chars[i].is_ascii_digit() {
                n = n * 10 + chars[i].to_digit(10)? as i128;
                i += 1;
            }
            values.push(n);
            continue;
        }
        match c {
            '(' => ops.push(c),
            ')' => {
                while let Some(&top) = ops.last() {
                    if top == '(' {
                        break;
                    }
                    apply(&mut values, ops.pop()?)?;
                }
                ops.pop();
            }
            '+' | '-' | '*' | '/' => {
                // Equal precedence pops first: left associativity
                while let Some(&top) = ops.last() {
                    if top == '(' || prec(top) < prec(c) {
                        break;
                    }
                    apply(&mut values, ops.pop()?)?;
                }
                ops.push(c);
            }
            _ => {}
        }
        i += 1;
    }
    while let Some(op) = ops.pop() {
        apply(&mut values, op)?;
    }
    values.pop()
}

#[test]
fn test_random_expressions_match_reference() {
    let mut rng = Lcg(0x5eed);
    let mut checked = 0;

    for _ in 0..2000 {
        let mut source = String::new();
        gen_expr(&mut rng, 4, &mut source);

        let expr = parse(&source).unwrap_or_else(|e| panic!("{:?} failed to parse: {}", source, e));
        match (reference_eval(&source), evaluate(&expr)) {
            (Some(expected), Ok(actual)) => {
                assert_eq!(actual as i128, expected, "mismatch for {:?}", source);
                checked += 1;
            }
            (None, Err(RuntimeError::DivisionByZero { .. })) => {}
            (expected, actual) => {
                panic!("{:?}: reference {:?}, evaluator {:?}", source, expected, actual)
            }
        }
    }

    assert!(checked > 500, "too few expressions evaluated: {}", checked);
}

#[test]
fn test_display_round_trips_through_parser() {
    let mut rng = Lcg(42);
    for _ in 0..500 {
        let mut source = String::new();
        gen_expr(&mut rng, 4, &mut source);
        let expr = parse(&source).unwrap();
        // The fully parenthesised form must describe the same tree
        assert_eq!(parse(&expr.to_string()).unwrap(), expr);
    }
}
