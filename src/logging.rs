use log::SetLoggerError;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::io::Write;

#[derive(Clone, Copy, Debug)]
pub struct Config {
	pub level: LevelFilter,
	pub show_target: bool,
}
impl Default for Config {
	fn default() -> Self {
		Self {
			level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			show_target: false,
		}
	}
}
impl Config {
	pub fn prefer_target(mut self) -> Self {
		self.show_target = true;
		self
	}

	fn build(&self) -> simplelog::Config {
		let mut builder = ConfigBuilder::new();
		builder
			.set_time_level(LevelFilter::Off)
			.set_thread_level(LevelFilter::Off)
			.set_location_level(LevelFilter::Off);
		builder.set_target_level(match self.show_target {
			true => LevelFilter::Error,
			false => LevelFilter::Off,
		});
		builder.build()
	}
}

/// Installs the global logger, forwarding every record to the browser console.
pub fn init(config: Config) -> Result<(), SetLoggerError> {
	WriteLogger::init(config.level, config.build(), ConsoleWriter::default())
}

/// Buffers formatted output and emits one console message per line.
#[derive(Default)]
struct ConsoleWriter {
	buffer: Vec<u8>,
}
impl ConsoleWriter {
	fn take_lines(&mut self) -> Vec<String> {
		let mut lines = Vec::new();
		while let Some(end) = self.buffer.iter().position(|byte| *byte == b'\n') {
			let line: Vec<u8> = self.buffer.drain(..=end).collect();
			let line = String::from_utf8_lossy(&line);
			lines.push(line.trim_end().to_owned());
		}
		lines
	}
}
impl Write for ConsoleWriter {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.buffer.extend_from_slice(buf);
		for line in self.take_lines() {
			web_sys::console::log_1(&line.into());
		}
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		if !self.buffer.is_empty() {
			let rest = String::from_utf8_lossy(&self.buffer).into_owned();
			self.buffer.clear();
			web_sys::console::log_1(&rest.into());
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_buffered_output_into_lines() {
		let mut writer = ConsoleWriter::default();
		writer.buffer.extend_from_slice(b"[INFO] first\n[WARN] sec");
		assert_eq!(writer.take_lines(), vec!["[INFO] first".to_owned()]);
		writer.buffer.extend_from_slice(b"ond\n");
		assert_eq!(writer.take_lines(), vec!["[WARN] second".to_owned()]);
		assert!(writer.buffer.is_empty());
	}
}
