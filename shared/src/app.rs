use tracing::{debug, warn};

use crate::capabilities::Capabilities;
use crate::event::Event;
use crate::model::Model;
use crate::view::ViewModel;

#[derive(Default)]
pub struct App;

impl App {
    fn submit_new_friend(model: &mut Model) {
        let friend = match model.add_form.submit() {
            Ok(friend) => friend,
            Err(e) => {
                debug!(code = e.code(), "Add friend ignored: {e}");
                return;
            }
        };

        if let Err(e) = model.friend_added(friend) {
            warn!(error = %e, "Add friend rejected by store");
        }
    }

    fn submit_split(model: &mut Model) {
        if model.selected_friend().is_none() {
            debug!("Split ignored: nothing selected");
            return;
        }

        let delta = match model.split_form.delta() {
            Ok(delta) => delta,
            Err(e) => {
                debug!(code = e.code(), "Split ignored: {e}");
                return;
            }
        };

        if let Err(e) = model.bill_split(delta) {
            warn!(error = %e, "Split rejected by store");
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(event = event.name(), "update");

        match event {
            Event::Noop => return,

            Event::Configure(config) => {
                if let Err(e) = config.validate() {
                    warn!(error = %e, "Config rejected");
                    return;
                }
                *model = Model::with_config(config);
            }

            Event::ToggleAddFriendForm => model.toggle_add_form(),

            Event::AddFriendNameChanged(name) => model.add_form.set_name(name),

            Event::AddFriendImageChanged(image) => model.add_form.set_image(image),

            Event::AddFriendSubmitted => Self::submit_new_friend(model),

            Event::FriendSelected(id) => model.select_friend(id),

            Event::BillChanged(text) => {
                if let Err(e) = model.split_form.set_bill(&text) {
                    debug!(code = e.code(), "Bill edit rejected: {e}");
                }
            }

            Event::UserExpenseChanged(text) => {
                if let Err(e) = model.split_form.set_user_expense(&text) {
                    debug!(code = e.code(), "Expense edit rejected: {e}");
                }
            }

            Event::PayerChanged(payer) => model.split_form.set_payer(payer),

            Event::SplitBillSubmitted => Self::submit_split(model),
        }

        model.reconcile_selection();
        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::build(model)
    }
}
