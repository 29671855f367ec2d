use std::io;
use std::sync::mpsc;
use std::time::Duration;

use gtk4::glib::ControlFlow;

pub(super) const SESSION_RESULT_POLL_INTERVAL: Duration = Duration::from_millis(24);
const SESSION_THREAD_NAME: &str = "swatchlens-session";

/// Runs `work` on a named thread and hands its value to `on_result` on the
/// GTK main loop. If the worker dies without a value, `on_lost` runs instead.
pub(super) fn spawn_session_worker<T, W, H, L>(work: W, on_result: H, on_lost: L) -> io::Result<()>
where
    T: Send + 'static,
    W: FnOnce() -> T + Send + 'static,
    H: FnOnce(T) + 'static,
    L: FnOnce() + 'static,
{
    let (tx, rx) = mpsc::channel::<T>();
    std::thread::Builder::new()
        .name(SESSION_THREAD_NAME.to_string())
        .spawn(move || {
            let result = work();
            let _ = tx.send(result);
        })?;

    let mut handlers = Some((on_result, on_lost));
    gtk4::glib::timeout_add_local(SESSION_RESULT_POLL_INTERVAL, move || {
        poll_session_result(&rx, &mut handlers)
    });
    Ok(())
}

/// One main-loop tick. Consumes `handlers` once the worker has answered or gone away.
fn poll_session_result<T, H, L>(rx: &mpsc::Receiver<T>, handlers: &mut Option<(H, L)>) -> ControlFlow
where
    H: FnOnce(T),
    L: FnOnce(),
{
    match rx.try_recv() {
        Ok(result) => {
            if let Some((on_result, _)) = handlers.take() {
                on_result(result);
            }
            ControlFlow::Break
        }
        Err(mpsc::TryRecvError::Empty) => ControlFlow::Continue,
        Err(mpsc::TryRecvError::Disconnected) => {
            tracing::warn!("session worker exited without a result");
            if let Some((_, on_lost)) = handlers.take() {
                on_lost();
            }
            ControlFlow::Break
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Calls = Rc<RefCell<Vec<String>>>;

    fn recording_handlers(calls: &Calls) -> Option<(impl FnOnce(u32), impl FnOnce())> {
        let on_result_calls = calls.clone();
        let on_lost_calls = calls.clone();
        Some((
            move |value: u32| on_result_calls.borrow_mut().push(format!("result {value}")),
            move || on_lost_calls.borrow_mut().push("lost".to_string()),
        ))
    }

    #[test]
    fn keeps_polling_until_worker_answers() {
        let calls = Calls::default();
        let (tx, rx) = mpsc::channel::<u32>();
        let mut handlers = recording_handlers(&calls);

        assert!(matches!(poll_session_result(&rx, &mut handlers), ControlFlow::Continue));
        tx.send(7).expect("send result");
        assert!(matches!(poll_session_result(&rx, &mut handlers), ControlFlow::Break));

        assert_eq!(*calls.borrow(), vec!["result 7".to_string()]);
        assert!(handlers.is_none());
    }

    #[test]
    fn dead_worker_runs_lost_handler() {
        let calls = Calls::default();
        let (tx, rx) = mpsc::channel::<u32>();
        let mut handlers = recording_handlers(&calls);

        let worker = std::thread::spawn(move || {
            let _tx = tx;
            panic!("worker crashed");
        });
        assert!(worker.join().is_err());

        assert!(matches!(poll_session_result(&rx, &mut handlers), ControlFlow::Break));
        assert_eq!(*calls.borrow(), vec!["lost".to_string()]);
    }
}
