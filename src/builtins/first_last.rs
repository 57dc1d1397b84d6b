//! `FIRST`/`LAST`: navigate to the head or tail element of an ordered sequence
//! (`Value::Vec`/`Value::Seq`).

use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::ChildNavigator;
use crate::shim;
use crate::value::Value;

pub struct First;

impl<L: Clone> ChildNavigator<L> for First {
    fn children(&self, structure: &Value<L>, _frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        Ok(vec![shim::first("FIRST", structure)?])
    }

    fn rebuild(&self, structure: Value<L>, _frame: &Frame<L>, mut new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        let replacement = new_children
            .pop()
            .ok_or_else(|| PathError::shape_mismatch("FIRST", "no replacement produced"))?;
        shim::update_first("FIRST", structure, replacement)
    }
}

pub struct Last;

impl<L: Clone> ChildNavigator<L> for Last {
    fn children(&self, structure: &Value<L>, _frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        Ok(vec![shim::last("LAST", structure)?])
    }

    fn rebuild(&self, structure: Value<L>, _frame: &Frame<L>, mut new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        let replacement = new_children
            .pop()
            .ok_or_else(|| PathError::shape_mismatch("LAST", "no replacement produced"))?;
        shim::update_last("LAST", structure, replacement)
    }
}
