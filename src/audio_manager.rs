use std::io::Cursor;
use std::sync::Arc;
use std::{fs::File, io::Read};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    for p in paths {
        if let Some(b) = load_bytes(p) {
            return Some(b);
        }
    }
    None
}

/// Música de fondo en loop más un jingle al llegar a la meta. Todo es
/// opcional: sin assets o sin dispositivo de salida el juego sigue mudo.
pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bg_sink: Option<Sink>,
    victory: Option<Arc<Vec<u8>>>,
}

impl AudioManager {
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream,
            handle,
            bg_sink: None,
            victory: None,
        })
    }

    pub fn load_sfx_auto(&mut self) {
        self.victory = load_bytes_any(&[
            "assets/sfx_victory.wav",
            "assets/sounds/victory.wav",
            "assets/sounds/goal.wav",
        ])
        .map(Arc::new);
        if self.victory.is_none() {
            log::warn!("no victory sfx found under assets/");
        }
    }

    pub fn play_music_loop_auto(&mut self) {
        if self.bg_sink.is_some() {
            return;
        }
        let candidates = [
            "res/e1m1.wav",
            "assets/e1m1.wav",
            "assets/music_bg.wav",
            "assets/sounds/music.wav",
        ];
        if let Some(bytes) = load_bytes_any(&candidates) {
            if let Ok(dec) = Decoder::new_looped(Cursor::new(bytes)) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec);
                    sink.set_volume(0.35);
                    self.bg_sink = Some(sink);
                }
            }
        } else {
            log::warn!("no background music found, playing silent");
        }
    }

    pub fn play_victory(&self) {
        // sink propio y detach para que suene aunque cambiemos de modo
        if let Some(d) = self.victory.clone() {
            if let Ok(dec) = Decoder::new(Cursor::new(d.as_ref().clone())) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec);
                    sink.detach();
                }
            }
        }
    }
}
