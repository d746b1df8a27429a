/// Running byte count for one in-flight transfer. Only the latest value
/// matters; the UI coalesces events rather than keeping a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    pub bytes_transferred: u64,
    pub total_bytes: u64,
}

/// A progress event tagged with the file it belongs to.
#[derive(Debug, Clone)]
pub struct FileProgress {
    pub name: String,
    pub progress: TransferProgress,
}

impl FileProgress {
    pub fn describe(&self) -> String {
        format!(
            "{} transferred out of {}",
            self.progress.bytes_transferred, self.progress.total_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_reads_like_a_status_line() {
        let event = FileProgress {
            name: "a.pdf".to_string(),
            progress: TransferProgress {
                bytes_transferred: 512,
                total_bytes: 2048,
            },
        };
        assert_eq!(event.describe(), "512 transferred out of 2048");
    }
}
