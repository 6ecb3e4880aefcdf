use std::cell::RefCell;
use std::rc::Rc;
use vitrine_core::{FormSurface, FormUpdate, OptionPicks};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Browser-side implementation of the form capability set.
///
/// Picks live in component state, the quantity is read from the live input
/// field, and computed updates land in a yew state handle that drives the
/// next render. Swatch reflection happens by writing the resolved option
/// values back into the shared picks, so the controls always agree with
/// the current variant.
pub struct DomFormSurface {
    pub picks: Rc<RefCell<OptionPicks>>,
    pub qty_ref: NodeRef,
    pub update: UseStateHandle<Option<FormUpdate>>,
}

impl FormSurface for DomFormSurface {
    fn read_picks(&self) -> OptionPicks {
        self.picks.borrow().clone()
    }

    fn read_quantity(&self) -> String {
        self.qty_ref
            .cast::<HtmlInputElement>()
            .map_or_else(|| "1".to_string(), |input| input.value())
    }

    fn render(&mut self, update: &FormUpdate) {
        *self.picks.borrow_mut() = OptionPicks::new(
            update.options[0].clone(),
            update.options[1].clone(),
            update.options[2].clone(),
        );
        self.update.set(Some(update.clone()));
    }
}
