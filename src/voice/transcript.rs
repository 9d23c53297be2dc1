//! Speech recognition events and transcript accumulation
//!
//! A [`SpeechRecognizer`] pushes [`SpeechEvent`]s into a crossbeam channel;
//! [`TranscriptSession`] owns the receiving end and folds them into a
//! [`TranscriptState`] the UI can render each frame.

use crate::error::{Result, SkedgeError};
use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, info, warn};

/// Event emitted by a speech recognizer
#[derive(Clone, Debug, PartialEq)]
pub enum SpeechEvent {
    /// Recognized text; partial results are superseded by later ones
    Transcript { text: String, is_final: bool },
    Error(String),
}

/// Start/stop speech transcription
pub trait SpeechRecognizer {
    /// Begin transcribing, delivering events on `events`
    fn start(&mut self, events: Sender<SpeechEvent>) -> Result<()>;

    fn stop(&mut self) -> Result<()>;
}

/// Latest transcription results
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranscriptState {
    /// In-progress text, replaced by each partial result
    pub partial: String,
    /// Finalized utterances in arrival order
    pub finals: Vec<String>,
    pub last_error: Option<String>,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: SpeechEvent) {
        match event {
            SpeechEvent::Transcript { text, is_final: true } => {
                self.partial.clear();
                self.finals.push(text);
            }
            SpeechEvent::Transcript { text, is_final: false } => {
                self.partial = text;
            }
            SpeechEvent::Error(message) => {
                self.last_error = Some(message);
            }
        }
    }

    /// Everything recognized so far, finals followed by the pending partial
    pub fn full_text(&self) -> String {
        self.finals
            .iter()
            .map(String::as_str)
            .chain((!self.partial.is_empty()).then_some(self.partial.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn clear(&mut self) {
        self.partial.clear();
        self.finals.clear();
        self.last_error = None;
    }
}

/// Drives a [`SpeechRecognizer`] and collects what it hears
pub struct TranscriptSession<R: SpeechRecognizer> {
    recognizer: R,
    events_tx: Sender<SpeechEvent>,
    events_rx: Receiver<SpeechEvent>,
    state: TranscriptState,
    listening: bool,
}

impl<R: SpeechRecognizer> TranscriptSession<R> {
    pub fn new(recognizer: R, channel_capacity: usize) -> Self {
        let (events_tx, events_rx) = bounded(channel_capacity);
        Self {
            recognizer,
            events_tx,
            events_rx,
            state: TranscriptState::new(),
            listening: false,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        if self.listening {
            warn!("Already transcribing, ignoring start request");
            return Ok(());
        }
        self.state.clear();
        self.recognizer.start(self.events_tx.clone())?;
        self.listening = true;
        info!("Speech recognition started");
        Ok(())
    }

    pub fn stop(&mut self) -> Result<()> {
        if !self.listening {
            return Ok(());
        }
        self.listening = false;
        self.recognizer.stop()?;
        self.poll();
        info!("Speech recognition stopped");
        Ok(())
    }

    /// Drain pending events into the state; returns how many were applied
    pub fn poll(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            debug!("Speech event: {:?}", event);
            self.state.apply(event);
            count += 1;
        }
        count
    }

    /// The most recent recognizer error, if any, as a crate error
    pub fn last_error(&self) -> Option<SkedgeError> {
        self.state
            .last_error
            .as_ref()
            .map(|message| SkedgeError::SpeechError(message.clone()))
    }

    pub fn state(&self) -> &TranscriptState {
        &self.state
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed script of events when started
    struct ScriptedRecognizer {
        script: Vec<SpeechEvent>,
        on_stop: Vec<SpeechEvent>,
        sender: Option<Sender<SpeechEvent>>,
    }

    impl ScriptedRecognizer {
        fn new(script: Vec<SpeechEvent>) -> Self {
            Self {
                script,
                on_stop: Vec::new(),
                sender: None,
            }
        }
    }

    impl SpeechRecognizer for ScriptedRecognizer {
        fn start(&mut self, events: Sender<SpeechEvent>) -> Result<()> {
            for event in self.script.drain(..) {
                events
                    .send(event)
                    .map_err(|e| SkedgeError::SpeechError(e.to_string()))?;
            }
            self.sender = Some(events);
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            if let Some(sender) = self.sender.take() {
                for event in self.on_stop.drain(..) {
                    let _ = sender.send(event);
                }
            }
            Ok(())
        }
    }

    fn partial(text: &str) -> SpeechEvent {
        SpeechEvent::Transcript {
            text: text.to_string(),
            is_final: false,
        }
    }

    fn fin(text: &str) -> SpeechEvent {
        SpeechEvent::Transcript {
            text: text.to_string(),
            is_final: true,
        }
    }

    #[test]
    fn test_partials_are_replaced_by_final() {
        let mut state = TranscriptState::new();
        state.apply(partial("buy"));
        state.apply(partial("buy mi"));
        assert_eq!(state.full_text(), "buy mi");

        state.apply(fin("buy milk"));
        assert_eq!(state.partial, "");
        assert_eq!(state.full_text(), "buy milk");

        state.apply(partial("and"));
        assert_eq!(state.full_text(), "buy milk and");
    }

    #[test]
    fn test_session_collects_events() {
        let recognizer =
            ScriptedRecognizer::new(vec![partial("hel"), fin("hello"), partial("wor")]);
        let mut session = TranscriptSession::new(recognizer, 16);

        session.start().unwrap();
        assert!(session.is_listening());
        assert_eq!(session.poll(), 3);
        assert_eq!(session.state().finals, vec!["hello".to_string()]);
        assert_eq!(session.state().partial, "wor");
    }

    #[test]
    fn test_stop_drains_trailing_events() {
        let mut recognizer = ScriptedRecognizer::new(vec![partial("wor")]);
        recognizer.on_stop = vec![fin("world")];
        let mut session = TranscriptSession::new(recognizer, 16);

        session.start().unwrap();
        session.stop().unwrap();
        assert!(!session.is_listening());
        assert_eq!(session.state().full_text(), "world");
    }

    #[test]
    fn test_error_event_is_surfaced() {
        let recognizer = ScriptedRecognizer::new(vec![SpeechEvent::Error("no speech".into())]);
        let mut session = TranscriptSession::new(recognizer, 4);

        session.start().unwrap();
        session.poll();
        assert!(matches!(
            session.last_error(),
            Some(SkedgeError::SpeechError(m)) if m == "no speech"
        ));
    }

    #[test]
    fn test_restart_clears_previous_transcript() {
        let recognizer = ScriptedRecognizer::new(vec![fin("first")]);
        let mut session = TranscriptSession::new(recognizer, 4);
        session.start().unwrap();
        session.poll();
        session.stop().unwrap();
        assert_eq!(session.state().full_text(), "first");

        session.start().unwrap();
        assert_eq!(session.state().full_text(), "");
    }
}
