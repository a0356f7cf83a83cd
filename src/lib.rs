pub mod constants;
pub mod content;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod timer;
#[cfg(target_arch = "wasm32")]
mod tooltip;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::dom;
    use crate::page::Page;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    thread_local! {
        // The page lives as long as the view; `unmount` tears it down.
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("promptshield-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let document = dom::window_document()?;
        let page = Page::mount(&document)?;
        PAGE.with(|slot| {
            // Remounting replaces (and thereby unmounts) any previous page.
            slot.borrow_mut().replace(page);
        });
        Ok(())
    }

    /// Tear down the page and release every listener and timer it holds.
    #[wasm_bindgen]
    pub fn unmount() {
        let page = PAGE.with(|slot| slot.borrow_mut().take());
        drop(page);
    }
}
