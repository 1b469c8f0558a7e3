use std::time::Duration;

use dioxus::prelude::*;

use crate::platform::sleep;
use crate::use_directory;

/// The status banner. Each new notice schedules its own hide after
/// `hide_after`; a hide hides whatever is showing at that moment.
#[component]
pub fn NoticeBanner(hide_after: Duration) -> Element {
    let mut directory = use_directory();
    let seq = use_memo(move || directory.read().notice().seq());

    use_effect(move || {
        if seq() == 0 {
            return;
        }
        spawn(async move {
            sleep(hide_after).await;
            directory.write().notice_mut().hide();
        });
    });

    let Some(notice) = directory.read().notice().visible().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "errorMessage",
            class: notice.kind.class(),
            style: "display: block; color: white; margin-top: 10px; background-color: {notice.kind.color()};",
            "{notice.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::dioxus_core::VirtualDom;
    use store::{NoticeKind, UserDirectory};

    use super::*;
    use crate::test_support::run_for;

    type Seen = Rc<RefCell<Vec<Option<String>>>>;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Notices posted at millisecond offsets, and every visible message the
    /// host rendered.
    #[derive(Clone)]
    struct Script {
        notices: Vec<(u64, &'static str)>,
        seen: Seen,
    }

    fn banner_host(script: Script) -> Element {
        let mut directory = use_signal(UserDirectory::new);
        use_context_provider(|| directory);
        use_hook(|| {
            let notices = script.notices.clone();
            spawn(async move {
                let mut at = 0;
                for (offset, message) in notices {
                    sleep(ms(offset - at)).await;
                    at = offset;
                    directory.write().notify(message, NoticeKind::Error);
                }
            });
        });

        let shown = directory.read().notice().visible().map(|n| n.message.clone());
        {
            let mut seen = script.seen.borrow_mut();
            if seen.last() != Some(&shown) {
                seen.push(shown);
            }
        }

        rsx! {
            NoticeBanner { hide_after: ms(400) }
        }
    }

    fn mount(notices: Vec<(u64, &'static str)>) -> (VirtualDom, Seen) {
        let seen = Seen::default();
        let script = Script {
            notices,
            seen: seen.clone(),
        };
        let mut dom = VirtualDom::new_with_props(banner_host, script);
        dom.rebuild_in_place();
        (dom, seen)
    }

    fn latest(seen: &Seen) -> Option<String> {
        seen.borrow().last().cloned().flatten()
    }

    #[tokio::test]
    async fn test_notice_hides_after_interval() {
        let (mut dom, seen) = mount(vec![(0, "saved")]);

        run_for(&mut dom, ms(200)).await;
        assert_eq!(latest(&seen).as_deref(), Some("saved"));

        run_for(&mut dom, ms(400)).await;
        assert_eq!(latest(&seen), None);
        assert_eq!(*seen.borrow(), vec![None, Some("saved".to_string()), None]);
    }

    #[tokio::test]
    async fn test_earlier_timer_hides_newer_notice() {
        let (mut dom, seen) = mount(vec![(0, "first"), (200, "second")]);

        run_for(&mut dom, ms(100)).await;
        assert_eq!(latest(&seen).as_deref(), Some("first"));

        run_for(&mut dom, ms(200)).await;
        assert_eq!(latest(&seen).as_deref(), Some("second"));

        // the first notice's timer fires at 400ms, before the second's
        run_for(&mut dom, ms(200)).await;
        assert_eq!(latest(&seen), None);

        run_for(&mut dom, ms(200)).await;
        assert_eq!(
            *seen.borrow(),
            vec![
                None,
                Some("first".to_string()),
                Some("second".to_string()),
                None,
            ]
        );
    }
}
