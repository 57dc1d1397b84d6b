//! `ALL`: navigate into every child of a container, in iteration order.

use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::ChildNavigator;
use crate::shim;
use crate::value::Value;

pub struct All;

impl<L: Clone + PartialEq> ChildNavigator<L> for All {
    fn children(&self, structure: &Value<L>, _frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        shim::children("ALL", structure)
    }

    fn rebuild(&self, structure: Value<L>, _frame: &Frame<L>, new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        shim::rebuild("ALL", &structure, new_children)
    }
}
