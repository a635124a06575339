//! Icon and alert-sound loading. Any asset may fail to arrive; the app then
//! renders without that icon or checks silently, instead of aborting.

use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::Assets;

pub struct LoadedAssets {
    pub icons: Assets,
    pub alert: Option<web::HtmlAudioElement>,
}

pub async fn load(window: &web::Window) -> LoadedAssets {
    let speaker_icon = match fetch_png(window, "images/speaker-icon.png").await {
        Ok(pm) => Some(pm),
        Err(e) => {
            log::warn!("[assets] speaker icon unavailable: {:?}", e);
            None
        }
    };
    let mic_icon = match fetch_png(window, "images/mic-icon.png").await {
        Ok(pm) => Some(pm),
        Err(e) => {
            log::warn!("[assets] mic icon unavailable: {:?}", e);
            None
        }
    };
    let alert = web::HtmlAudioElement::new_with_src("audio/feedback.mp3").ok();
    if alert.is_none() {
        log::warn!("[assets] feedback audio unavailable");
    }
    LoadedAssets {
        icons: Assets {
            speaker_icon,
            mic_icon,
        },
        alert,
    }
}

async fn fetch_png(window: &web::Window, url: &str) -> anyhow::Result<tiny_skia::Pixmap> {
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value.dyn_into().map_err(|e| anyhow!("{:?}", e))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {}: HTTP {}", url, resp.status()));
    }
    let buffer = JsFuture::from(resp.array_buffer().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    tiny_skia::Pixmap::decode_png(&bytes).map_err(|e| anyhow!("decode {}: {}", url, e))
}

/// Restart-from-zero then play; safe to call repeatedly.
pub fn play_alert(audio: &web::HtmlAudioElement) {
    audio.set_current_time(0.0);
    let _ = audio.play();
}
