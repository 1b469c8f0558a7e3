use std::time::{Duration, Instant};

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

/// Drive `dom` for `span` of wall-clock time, rendering whatever work arrives.
pub(crate) async fn run_for(dom: &mut VirtualDom, span: Duration) {
    let deadline = Instant::now() + span;
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        if tokio::time::timeout(left, dom.wait_for_work()).await.is_err() {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}
