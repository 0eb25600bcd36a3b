//! File-backed messenger.
//!
//! Each delivery becomes one JSON line in `outbox.jsonl`; photo bytes are
//! written next to it as `<id>-<file name>`. Useful for running the bot
//! without a chat service and for inspecting what it would have sent.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::TransportError;
use crate::markup::ReplyMarkup;
use crate::messenger::{ChatId, Dice, MediaGroup, MessageId, Messenger, Photo, TextMessage};

pub const OUTBOX_LOG: &str = "outbox.jsonl";

/// One line of `outbox.jsonl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboxRecord {
    /// RFC 3339 time of the delivery, UTC.
    pub ts: String,
    pub message_ids: Vec<MessageId>,
    #[serde(flatten)]
    pub delivery: Delivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Delivery {
    Message(TextMessage),
    Photo {
        #[serde(flatten)]
        photo: Photo,
        path: PathBuf,
    },
    MediaGroup {
        #[serde(flatten)]
        group: MediaGroup,
        paths: Vec<PathBuf>,
    },
    Dice(Dice),
    EditMarkup {
        chat_id: ChatId,
        message_id: MessageId,
        reply_markup: Option<ReplyMarkup>,
    },
    Delete {
        chat_id: ChatId,
        message_id: MessageId,
    },
}

#[derive(Debug)]
pub struct OutboxMessenger {
    dir: PathBuf,
    next_id: AtomicI64,
    log: Mutex<()>,
}

impl OutboxMessenger {
    /// Creates `dir` if needed. Ids continue after the highest one already
    /// recorded in the directory, starting at 1 for a fresh outbox.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, TransportError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let mut outbox = Self {
            dir,
            next_id: AtomicI64::new(1),
            log: Mutex::new(()),
        };
        let last = outbox
            .records()?
            .iter()
            .flat_map(|record| record.message_ids.iter().copied())
            .max()
            .unwrap_or(0);
        *outbox.next_id.get_mut() = last + 1;
        Ok(outbox)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(OUTBOX_LOG)
    }

    /// Reads back every record written so far.
    pub fn records(&self) -> Result<Vec<OutboxRecord>, TransportError> {
        let path = self.log_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(TransportError::from))
            .collect()
    }

    fn allocate(&self) -> MessageId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn write_photo(
        &self,
        id: MessageId,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, TransportError> {
        let path = self.dir.join(format!("{:06}-{}", id, file_name));
        fs::write(&path, bytes)?;
        Ok(path)
    }

    fn append(
        &self,
        message_ids: Vec<MessageId>,
        delivery: Delivery,
    ) -> Result<(), TransportError> {
        let record = OutboxRecord {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message_ids,
            delivery,
        };
        let line = serde_json::to_string(&record)?;

        let _guard = self
            .log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())?;
        writeln!(file, "{}", line)?;
        debug!(ids = ?record.message_ids, "outbox record appended");
        Ok(())
    }
}

impl Messenger for OutboxMessenger {
    fn send_message(&self, message: &TextMessage) -> Result<MessageId, TransportError> {
        let id = self.allocate();
        self.append(vec![id], Delivery::Message(message.clone()))?;
        Ok(id)
    }

    fn send_photo(&self, photo: &Photo) -> Result<MessageId, TransportError> {
        let id = self.allocate();
        let path = self.write_photo(id, &photo.file_name, &photo.bytes)?;
        self.append(
            vec![id],
            Delivery::Photo {
                photo: photo.clone(),
                path,
            },
        )?;
        Ok(id)
    }

    fn send_media_group(&self, group: &MediaGroup) -> Result<Vec<MessageId>, TransportError> {
        if group.media.is_empty() {
            return Err(TransportError::EmptyMediaGroup {
                chat_id: group.chat_id,
            });
        }
        let mut ids = Vec::with_capacity(group.media.len());
        let mut paths = Vec::with_capacity(group.media.len());
        for item in &group.media {
            let id = self.allocate();
            paths.push(self.write_photo(id, &item.file_name, &item.bytes)?);
            ids.push(id);
        }
        self.append(
            ids.clone(),
            Delivery::MediaGroup {
                group: group.clone(),
                paths,
            },
        )?;
        Ok(ids)
    }

    fn send_dice(&self, dice: &Dice) -> Result<MessageId, TransportError> {
        let id = self.allocate();
        self.append(vec![id], Delivery::Dice(dice.clone()))?;
        Ok(id)
    }

    fn edit_message_reply_markup(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        markup: Option<&ReplyMarkup>,
    ) -> Result<(), TransportError> {
        self.check_known(chat_id, message_id)?;
        self.append(
            Vec::new(),
            Delivery::EditMarkup {
                chat_id,
                message_id,
                reply_markup: markup.cloned(),
            },
        )
    }

    fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<(), TransportError> {
        self.check_known(chat_id, message_id)?;
        self.append(
            Vec::new(),
            Delivery::Delete {
                chat_id,
                message_id,
            },
        )
    }
}

impl OutboxMessenger {
    /// Only ids this outbox handed out can be edited or deleted.
    fn check_known(&self, chat_id: ChatId, message_id: MessageId) -> Result<(), TransportError> {
        if message_id < 1 || message_id >= self.next_id.load(Ordering::SeqCst) {
            return Err(TransportError::MessageNotFound {
                chat_id,
                message_id,
            });
        }
        Ok(())
    }
}
