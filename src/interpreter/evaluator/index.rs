use std::rc::Rc;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Flow},
        object::{
            core::{Object, NULL},
            environment::Env,
            hash_key::{HashMapObject, HashPair},
        },
    },
};

impl Evaluator {
    /// Evaluates `left[index]` once both sides are known.
    ///
    /// Arrays take an integer index and yield `null` when it is out of range,
    /// negative indices included. Hashes yield `null` for a missing key.
    ///
    /// # Errors
    /// - `UnusableHashKey` when a hash is indexed by a value with no hash key.
    /// - `IndexNotSupported` for any other combination.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{evaluator::core::Evaluator, object::core::{NULL, Object}};
    ///
    /// let array = Object::from(vec![Object::Integer(1), Object::Integer(2)]);
    ///
    /// assert_eq!(Evaluator::eval_index(&array, &Object::Integer(1)), Ok(Object::Integer(2)));
    /// assert_eq!(Evaluator::eval_index(&array, &Object::Integer(-1)), Ok(NULL));
    /// ```
    pub fn eval_index(left: &Object, index: &Object) -> EvalResult<Object> {
        match (left, index) {
            (Object::Array(elements), Object::Integer(i)) => {
                Ok(usize::try_from(*i).ok()
                                      .and_then(|i| elements.get(i))
                                      .cloned()
                                      .unwrap_or(NULL))
            },
            (Object::Hash(pairs), _) => {
                let key = index.hash_key()
                               .ok_or(RuntimeError::UnusableHashKey { kind: index.object_type() })?;

                Ok(pairs.get(&key).map_or(NULL, |pair| pair.value.clone()))
            },
            _ => Err(RuntimeError::IndexNotSupported { kind: left.object_type() }),
        }
    }

    /// Evaluates a hash literal.
    ///
    /// Each key is evaluated and checked for a hash key before its value is
    /// evaluated; pairs are processed in source order and the first error or
    /// `return` stops the literal. A repeated key keeps its first position but takes
    /// the last value.
    pub(crate) fn eval_hash_literal(&mut self,
                                    pairs: &[(Expression, Expression)],
                                    env: &Env)
                                    -> Flow<Object> {
        let mut hash = HashMapObject::default();

        for (key_expression, value_expression) in pairs {
            let key = self.eval_expression(key_expression, env)?;
            let hash_key = key.hash_key()
                              .ok_or(RuntimeError::UnusableHashKey { kind: key.object_type() })?;
            let value = self.eval_expression(value_expression, env)?;

            hash.insert(hash_key, HashPair { key, value });
        }

        Ok(Object::Hash(Rc::new(hash)))
    }
}
