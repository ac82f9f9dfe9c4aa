use std::collections::HashMap;

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};

use crate::{
    error::EvalError,
    interpreter::{
        dispatch::{EvalResult, Function, Operator},
        value::{
            core::{TypeTag, Value},
            generator::Generator,
        },
    },
};

/// The reserved assignment operator. It is declared in the operator table so
/// the parser treats it as an infix operator, but the evaluator intercepts
/// it before dispatch; its `Operator` entry has no implementations.
pub const ASSIGN: &str = ":=";

/// Builds the builtin operator table seeded into every new environment.
#[must_use]
pub fn operators() -> HashMap<String, Operator> {
    use TypeTag::{Array, Generator, Number};

    let mut ops = HashMap::new();

    ops.insert("+".to_string(),
               Operator::new().with(Number, Number, add_numbers)
                              .with(Array, Array, add_arrays)
                              .with(Array, Number, add_broadcast)
                              .with(Number, Array, add_broadcast));
    ops.insert("*".to_string(),
               Operator::new().with(Number, Number, mul_numbers));
    ops.insert("..".to_string(),
               Operator::new().with(Number, Number, range_numbers));
    ops.insert("@".to_string(),
               Operator::new().with(Array, Array, access_gather)
                              .with(Array, Number, access_element)
                              .with(Number, Array, access_element));
    ops.insert("!=".to_string(),
               Operator::new().with(Array, Number, set_fill)
                              .with(Number, Array, set_fill));
    ops.insert("---".to_string(),
               Operator::new().with(Generator, Number, generator_take));
    ops.insert(ASSIGN.to_string(), Operator::new());

    ops
}

/// Builds the builtin function table seeded into every new environment.
#[must_use]
pub fn functions() -> HashMap<String, Function> {
    use TypeTag::{Array, Number};

    let mut fns = HashMap::new();

    fns.insert("abs".to_string(), Function::new(1).with(&[Number], abs_number));
    fns.insert("neg".to_string(), Function::new(1).with(&[Number], neg_number));
    fns.insert("len".to_string(), Function::new(1).with(&[Array], array_len));
    fns.insert("...".to_string(), Function::new(1).with(&[Number], count_up_array));
    fns.insert("...$".to_string(),
               Function::new(1).with(&[Number], count_up_generator));

    fns
}

/// Truncates a decimal toward zero and converts it to `i64`, saturating at
/// the representable bounds.
fn truncate(value: &BigDecimal) -> i64 {
    value.with_scale_round(0, RoundingMode::Down)
         .to_i64()
         .unwrap_or_else(|| {
             if value < &BigDecimal::zero() {
                 i64::MIN
             } else {
                 i64::MAX
             }
         })
}

/// Builds the dispatch error for a handler reached with operand types it
/// does not actually support. Handlers are registered per signature, so this
/// only fires if a table entry and its handler disagree.
fn operator_mismatch(operator: &str, lhs: &Value, rhs: &Value) -> EvalError {
    EvalError::NoOperatorImpl { operator:  operator.to_string(),
                                signature: format!("{}/{}", lhs.type_tag(), rhs.type_tag()), }
}

fn function_mismatch(function: &str, args: &[Value]) -> EvalError {
    EvalError::NoFunctionImpl { function:  function.to_string(),
                                signature: args.iter()
                                               .map(|a| a.type_tag().to_string())
                                               .collect::<Vec<_>>()
                                               .join("/"), }
}

fn add_numbers(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok((a + b).into()),
        _ => Err(operator_mismatch("+", lhs, rhs)),
    }
}

fn add_arrays(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                return Err(EvalError::LengthMismatch { left:  a.len(),
                                                       right: b.len(), });
            }
            Ok(a.iter()
                .zip(b.iter())
                .map(|(x, y)| x + y)
                .collect::<Vec<_>>()
                .into())
        },
        _ => Err(operator_mismatch("+", lhs, rhs)),
    }
}

/// Broadcast addition between an array and a scalar. Registered for both
/// argument orders; branches at runtime to find which side is the array.
fn add_broadcast(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Array(values), Value::Number(scalar))
        | (Value::Number(scalar), Value::Array(values)) => {
            Ok(values.iter().map(|v| v + scalar).collect::<Vec<_>>().into())
        },
        _ => Err(operator_mismatch("+", lhs, rhs)),
    }
}

fn mul_numbers(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok((a * b).into()),
        _ => Err(operator_mismatch("*", lhs, rhs)),
    }
}

/// `lower .. upper`: consecutive integers from lower (inclusive) to upper
/// (exclusive). Fractional bounds truncate toward zero; an empty or inverted
/// range yields an empty array.
fn range_numbers(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => {
            let lower = truncate(a);
            let upper = truncate(b);
            Ok((lower..upper).map(BigDecimal::from).collect::<Vec<_>>().into())
        },
        _ => Err(operator_mismatch("..", lhs, rhs)),
    }
}

/// Bounds-checked element lookup shared by the `@` handlers.
fn element_at(values: &[BigDecimal], index: &BigDecimal) -> EvalResult<BigDecimal> {
    let index = truncate(index);
    usize::try_from(index)
        .ok()
        .and_then(|i| values.get(i))
        .cloned()
        .ok_or(EvalError::IndexOutOfBounds { len: values.len(),
                                             index })
}

/// `array @ indexes`: gathers the element at each index of the second array
/// from the first.
fn access_gather(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Array(values), Value::Array(indexes)) => {
            let mut gathered = Vec::with_capacity(indexes.len());
            for index in indexes.iter() {
                gathered.push(element_at(values, index)?);
            }
            Ok(gathered.into())
        },
        _ => Err(operator_mismatch("@", lhs, rhs)),
    }
}

/// Single-element access between an array and a scalar index, in either
/// order.
fn access_element(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Array(values), Value::Number(index))
        | (Value::Number(index), Value::Array(values)) => {
            Ok(element_at(values, index)?.into())
        },
        _ => Err(operator_mismatch("@", lhs, rhs)),
    }
}

/// `array != scalar` (or the reverse): a new array of the same length with
/// every element replaced by the scalar. Neither input is mutated.
fn set_fill(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Array(values), Value::Number(scalar))
        | (Value::Number(scalar), Value::Array(values)) => {
            Ok(vec![scalar.clone(); values.len()].into())
        },
        _ => Err(operator_mismatch("!=", lhs, rhs)),
    }
}

/// `generator --- n`: pulls n values into an eager array. Exhausting the
/// generator before n values have been produced is an error identifying the
/// step at which it ran out.
fn generator_take(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Generator(gen), Value::Number(count)) => {
            let requested = usize::try_from(truncate(count)).unwrap_or(0);
            let mut taken = Vec::with_capacity(requested);
            let mut gen = gen.borrow_mut();

            for step in 0..requested {
                match gen.next() {
                    Some(value) => taken.push(value),
                    None => {
                        return Err(EvalError::GeneratorExhausted { taken: step,
                                                                   requested });
                    },
                }
            }
            Ok(taken.into())
        },
        _ => Err(operator_mismatch("---", lhs, rhs)),
    }
}

fn abs_number(args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Number(a)] => Ok(a.abs().into()),
        _ => Err(function_mismatch("abs", args)),
    }
}

fn neg_number(args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Number(a)] => Ok((-a).into()),
        _ => Err(function_mismatch("neg", args)),
    }
}

fn array_len(args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Array(values)] => Ok(BigDecimal::from(values.len() as u64).into()),
        _ => Err(function_mismatch("len", args)),
    }
}

/// `... n`: the eager count-up array `[0, 1, ..., n-1]`.
fn count_up_array(args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Number(n)] => {
            let upper = truncate(n);
            Ok((0..upper).map(BigDecimal::from).collect::<Vec<_>>().into())
        },
        _ => Err(function_mismatch("...", args)),
    }
}

/// `...$ n`: the lazy count-up generator bounded at n.
fn count_up_generator(args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Number(n)] => {
            Ok(Generator::count_up(BigDecimal::from(truncate(n))).into())
        },
        _ => Err(function_mismatch("...$", args)),
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::{functions, operators};
    use crate::{error::EvalError, interpreter::value::core::Value};

    fn num(n: i64) -> Value {
        Value::from(BigDecimal::from(n))
    }

    fn array(values: &[i64]) -> Value {
        values.iter()
              .map(|&v| BigDecimal::from(v))
              .collect::<Vec<_>>()
              .into()
    }

    #[test]
    fn addition_is_polymorphic() {
        let ops = operators();
        let add = &ops["+"];

        assert_eq!(add.dispatch("+", &num(1), &num(2)).unwrap(), num(3));
        assert_eq!(add.dispatch("+", &array(&[1, 2]), &array(&[10, 20])).unwrap(),
                   array(&[11, 22]));
        assert_eq!(add.dispatch("+", &array(&[1, 2]), &num(10)).unwrap(),
                   array(&[11, 12]));
        assert_eq!(add.dispatch("+", &num(10), &array(&[1, 2])).unwrap(),
                   array(&[11, 12]));
    }

    #[test]
    fn addition_rejects_mismatched_lengths() {
        let ops = operators();
        assert_eq!(ops["+"].dispatch("+", &array(&[1, 2, 3]), &array(&[1])),
                   Err(EvalError::LengthMismatch { left: 3, right: 1 }));
    }

    #[test]
    fn range_is_half_open_and_truncating() {
        let ops = operators();
        let range = &ops[".."];

        assert_eq!(range.dispatch("..", &num(2), &num(5)).unwrap(), array(&[2, 3, 4]));
        assert_eq!(range.dispatch("..", &num(5), &num(2)).unwrap(), array(&[]));

        let fractional = Value::from("2.9".parse::<BigDecimal>().unwrap());
        assert_eq!(range.dispatch("..", &fractional, &num(5)).unwrap(), array(&[2, 3, 4]));
    }

    #[test]
    fn access_gathers_and_indexes() {
        let ops = operators();
        let access = &ops["@"];
        let source = array(&[10, 20, 30]);

        assert_eq!(access.dispatch("@", &source, &num(1)).unwrap(), num(20));
        assert_eq!(access.dispatch("@", &num(2), &source).unwrap(), num(30));
        assert_eq!(access.dispatch("@", &source, &array(&[2, 0])).unwrap(),
                   array(&[30, 10]));
    }

    #[test]
    fn access_out_of_bounds_is_an_error() {
        let ops = operators();
        let source = array(&[10, 20, 30]);

        assert_eq!(ops["@"].dispatch("@", &source, &num(5)),
                   Err(EvalError::IndexOutOfBounds { len: 3, index: 5 }));
        assert_eq!(ops["@"].dispatch("@", &source, &num(-1)),
                   Err(EvalError::IndexOutOfBounds { len: 3, index: -1 }));
    }

    #[test]
    fn set_replaces_every_element() {
        let ops = operators();
        let source = array(&[1, 2, 3]);

        assert_eq!(ops["!="].dispatch("!=", &source, &num(7)).unwrap(),
                   array(&[7, 7, 7]));
        // The original array is untouched.
        assert_eq!(source, array(&[1, 2, 3]));
    }

    #[test]
    fn count_up_functions_agree() {
        let fns = functions();
        let ops = operators();

        assert_eq!(fns["..."].dispatch("...", &[num(5)]).unwrap(),
                   array(&[0, 1, 2, 3, 4]));

        let gen = fns["...$"].dispatch("...$", &[num(5)]).unwrap();
        assert_eq!(ops["---"].dispatch("---", &gen, &num(3)).unwrap(), array(&[0, 1, 2]));
    }

    #[test]
    fn take_past_the_bound_reports_exhaustion() {
        let fns = functions();
        let ops = operators();

        let gen = fns["...$"].dispatch("...$", &[num(5)]).unwrap();
        assert_eq!(ops["---"].dispatch("---", &gen, &num(6)),
                   Err(EvalError::GeneratorExhausted { taken:     5,
                                                       requested: 6, }));
    }

    #[test]
    fn unary_numeric_functions() {
        let fns = functions();

        assert_eq!(fns["abs"].dispatch("abs", &[num(-3)]).unwrap(), num(3));
        assert_eq!(fns["neg"].dispatch("neg", &[num(5)]).unwrap(), num(-5));
        assert_eq!(fns["len"].dispatch("len", &[array(&[1, 2, 3])]).unwrap(), num(3));
    }
}
