use crate::ui::mvi::Reducer;
use crate::ui::request::intent::RequestIntent;
use crate::ui::request::state::RequestState;

pub struct RequestReducer;

impl Reducer for RequestReducer {
    type State = RequestState;
    type Intent = RequestIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Starting clears any previous result or error
            RequestIntent::RequestStart => RequestState::Loading,
            RequestIntent::RequestSuccess(items) => match state {
                RequestState::Loading => RequestState::Succeeded(items),
                other => other,
            },
            RequestIntent::RequestFailure(message) => match state {
                RequestState::Loading => RequestState::Failed(message),
                other => other,
            },
        }
    }
}
