use bigdecimal::{BigDecimal, One};

/// A step closure: produces the next value from the current one, or signals
/// exhaustion with `None`.
pub type Step = Box<dyn FnMut(&BigDecimal) -> Option<BigDecimal>>;

/// A transformation closure applied to each pulled value, in registration
/// order. Returning `None` exhausts the generator and discards the value.
pub type Transform = Box<dyn FnMut(BigDecimal) -> Option<BigDecimal>>;

/// A stateful, possibly-bounded lazy sequence of numbers.
///
/// A generator is a two-state machine: *active* until its primary step
/// signals exhaustion, then *exhausted* forever. Each [`Generator::next`]
/// call emits the current value after passing it through every chained
/// transformation, and advances the current value via the primary step.
/// Transformations are fused: a pulled element flows through all of them
/// before it is returned, and chaining is additive only.
pub struct Generator {
    current:    BigDecimal,
    done:       bool,
    step:       Step,
    transforms: Vec<Transform>,
}

impl Generator {
    /// Creates a generator from a starting value and a primary step.
    #[must_use]
    pub fn new(start: BigDecimal, step: Step) -> Self {
        Self { current: start,
               done: false,
               step,
               transforms: Vec::new() }
    }

    /// Creates the bounded count-up generator behind `...$ n`.
    ///
    /// It yields `0, 1, ...` and exhausts once `bound` values have been
    /// produced, so `...$ 5` yields exactly `0` through `4`.
    #[must_use]
    pub fn count_up(bound: BigDecimal) -> Self {
        Self::new(BigDecimal::from(0), Box::new(move |current| {
                      if *current >= bound {
                          None
                      } else {
                          Some(current + BigDecimal::one())
                      }
                  }))
    }

    /// Appends a transformation applied to every subsequently pulled value.
    /// Transformations run in registration order and cannot be removed.
    pub fn chain(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    /// Returns `true` once the generator has signalled exhaustion.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Pulls the next value, or `None` once the generator is exhausted.
    ///
    /// The primary step runs first; if it reports exhaustion the generator
    /// transitions to its terminal state and nothing is emitted. Otherwise
    /// the previous current value is passed through every transformation in
    /// order, any of which may itself exhaust the generator.
    pub fn next(&mut self) -> Option<BigDecimal> {
        if self.done {
            return None;
        }

        let Some(next) = (self.step)(&self.current) else {
            self.done = true;
            return None;
        };

        let mut value = std::mem::replace(&mut self.current, next);
        for transform in &mut self.transforms {
            match transform(value) {
                Some(transformed) => value = transformed,
                None => {
                    self.done = true;
                    return None;
                },
            }
        }

        Some(value)
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
         .field("current", &self.current)
         .field("done", &self.done)
         .field("transforms", &self.transforms.len())
         .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::Generator;

    #[test]
    fn count_up_yields_values_below_the_bound() {
        let mut gen = Generator::count_up(BigDecimal::from(3));
        assert_eq!(gen.next(), Some(BigDecimal::from(0)));
        assert_eq!(gen.next(), Some(BigDecimal::from(1)));
        assert_eq!(gen.next(), Some(BigDecimal::from(2)));
        assert_eq!(gen.next(), None);
        assert!(gen.is_done());
    }

    #[test]
    fn exhaustion_is_terminal() {
        let mut gen = Generator::count_up(BigDecimal::from(0));
        assert_eq!(gen.next(), None);
        assert_eq!(gen.next(), None);
        assert!(gen.is_done());
    }

    #[test]
    fn transforms_apply_in_registration_order() {
        let mut gen = Generator::count_up(BigDecimal::from(3));
        gen.chain(Box::new(|v| Some(v * BigDecimal::from(10))));
        gen.chain(Box::new(|v| Some(v + BigDecimal::from(1))));

        assert_eq!(gen.next(), Some(BigDecimal::from(1)));
        assert_eq!(gen.next(), Some(BigDecimal::from(11)));
        assert_eq!(gen.next(), Some(BigDecimal::from(21)));
    }

    #[test]
    fn a_transform_may_exhaust_the_generator() {
        let mut gen = Generator::count_up(BigDecimal::from(10));
        gen.chain(Box::new(|v| {
               if v >= BigDecimal::from(2) {
                   None
               } else {
                   Some(v)
               }
           }));

        assert_eq!(gen.next(), Some(BigDecimal::from(0)));
        assert_eq!(gen.next(), Some(BigDecimal::from(1)));
        assert_eq!(gen.next(), None);
        assert!(gen.is_done());
    }
}
