// End-to-end suite for the public entry points: framing on write, detection
// and decompression on read, the error taxonomy, and the I/O variants.

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read, Seek, SeekFrom, Write};
    use std::sync::Arc;

    use serde::{Deserialize, Serialize};
    use zserde_core::{
        compression::{CodecId, CodecRegistry},
        config::Config,
        constants::{offsets, FORMAT_VERSION, HEADER_LEN},
        dump, dumps, dumps_with, headers::encode_header, load, load_streaming, loads,
        serializer::{Bincode, Json, Serializer},
        telemetry::FrameCounters,
        ErrorKind, FramedSerializer, WriteOptions,
    };

    #[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
    struct Sample {
        a: u32,
        b: Vec<u32>,
    }

    fn big_sample() -> Sample {
        Sample { a: 7, b: (0..20_000).map(|i| i % 97).collect() }
    }

    fn available() -> Vec<CodecId> {
        FramedSerializer::default().registry().list_available().map(|c| c.id()).collect()
    }

    fn compressing() -> Vec<CodecId> {
        available().into_iter().filter(|c| *c != CodecId::None).collect()
    }

    /// Reader that hands out at most `step` bytes per call and cannot seek.
    struct Dribble<R> {
        inner: R,
        step: usize,
    }

    impl<R: Read> Read for Dribble<R> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = buf.len().min(self.step);
            self.inner.read(&mut buf[..n])
        }
    }

    /// Writer that accepts `room` bytes, then reports a full disk.
    struct Full {
        room: usize,
    }

    impl Write for Full {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.room == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

// ## 1️⃣ Round trips

    #[test]
    fn every_available_codec_round_trips() {
        let value = big_sample();
        for codec in available() {
            let framed = dumps_with(&value, WriteOptions::new().codec(codec)).unwrap();
            assert_eq!(framed[offsets::CODEC_ID], codec as u8, "{codec}");
            assert_eq!(loads::<Sample>(&framed).unwrap(), value, "{codec}");
        }
    }

    #[test]
    fn every_level_bound_round_trips() {
        let value = big_sample();
        let fs = FramedSerializer::default();
        for codec in fs.registry().list_available() {
            let range = codec.levels();
            for level in [range.min, range.default, range.max] {
                let opts = WriteOptions::new().codec(codec.id()).level(i32::from(level));
                let framed = fs.dumps_with(&value, opts).unwrap();
                assert_eq!(framed[offsets::LEVEL], level);
                assert_eq!(fs.loads::<Sample>(&framed).unwrap(), value);
            }
        }
    }

    #[cfg(feature = "zstd")]
    #[test]
    fn small_record_with_zstd_level_3() {
        let value = Sample { a: 1, b: vec![1, 2, 3] };
        let framed = dumps_with(&value, WriteOptions::new().codec(CodecId::Zstd).level(3)).unwrap();
        assert_eq!(&framed[..4], b"ZSRD");
        assert_eq!(framed[offsets::VERSION], FORMAT_VERSION);
        assert_eq!(framed[offsets::CODEC_ID], 1);
        assert_eq!(framed[offsets::LEVEL], 3);
        assert_eq!(loads::<Sample>(&framed).unwrap(), value);
    }

    #[test]
    fn repetitive_input_shrinks_with_the_default_codec() {
        let value = big_sample();
        let raw = Bincode.serialize(&value).unwrap();
        let framed = dumps(&value).unwrap();
        if FramedSerializer::default().registry().default_codec().id() != CodecId::None {
            assert!(framed.len() < raw.len(), "{} >= {}", framed.len(), raw.len());
        }
        assert_eq!(loads::<Sample>(&framed).unwrap(), value);
    }

    #[test]
    fn identity_frame_payload_is_serializer_output() {
        let value = big_sample();
        let framed = dumps_with(&value, WriteOptions::new().codec(CodecId::None)).unwrap();
        assert_eq!(&framed[..HEADER_LEN], &encode_header(0, FORMAT_VERSION, 0));
        assert_eq!(framed[HEADER_LEN..], Bincode.serialize(&value).unwrap()[..]);
    }

    #[test]
    fn empty_serialized_values_round_trip() {
        for codec in available() {
            let framed = dumps_with(&(), WriteOptions::new().codec(codec)).unwrap();
            loads::<()>(&framed).unwrap();
        }
        assert_eq!(dumps(&()).unwrap().len(), HEADER_LEN);
    }

// ## 2️⃣ Legacy input

    #[test]
    fn plain_bincode_bytes_load_unchanged() {
        let value = big_sample();
        let legacy = Bincode.serialize(&value).unwrap();
        assert_eq!(loads::<Sample>(&legacy).unwrap(), value);

        let tiny = Bincode.serialize(&5u8).unwrap();
        assert!(tiny.len() < HEADER_LEN);
        assert_eq!(loads::<u8>(&tiny).unwrap(), 5);
    }

    #[test]
    fn plain_json_bytes_load_unchanged() {
        let fs = FramedSerializer::new(Json);
        let legacy = br#"{"a":1,"b":[1,2,3]}"#;
        assert_eq!(fs.loads::<Sample>(legacy).unwrap(), Sample { a: 1, b: vec![1, 2, 3] });
    }

// ## 3️⃣ Read-path errors

    #[test]
    fn unknown_codec_id_is_reported_as_such() {
        let mut framed = encode_header(200, FORMAT_VERSION, 0).to_vec();
        framed.extend_from_slice(b"arbitrary payload");
        let err = loads::<Sample>(&framed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCodec);
        assert_eq!(err.to_string(), "frame uses unknown codec 0xc8");
    }

    #[test]
    fn codec_missing_from_reader_registry_is_unknown() {
        let value = big_sample();
        for codec in compressing() {
            let framed = dumps_with(&value, WriteOptions::new().codec(codec)).unwrap();
            let bare = FramedSerializer::default()
                .with_registry(Arc::new(CodecRegistry::from_codecs(Vec::new())));
            let err = bare.loads::<Sample>(&framed).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownCodec, "{codec}");
        }
    }

    #[test]
    fn future_format_version_is_rejected() {
        let mut framed = dumps_with(&big_sample(), WriteOptions::new().codec(CodecId::None)).unwrap();
        framed[offsets::VERSION] = FORMAT_VERSION + 1;
        let err = loads::<Sample>(&framed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedVersion);
    }

    #[test]
    fn truncated_payload_is_corrupt() {
        let value = big_sample();
        for codec in compressing() {
            let framed = dumps_with(&value, WriteOptions::new().codec(codec)).unwrap();
            let payload_len = framed.len() - HEADER_LEN;
            let cut = &framed[..HEADER_LEN + payload_len / 2];
            let err = loads::<Sample>(cut).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CorruptFrame, "{codec}: {err}");
        }
    }

    #[test]
    fn dropping_the_last_byte_is_corrupt() {
        let values = [
            Sample { a: 1, b: vec![1, 2, 3] },
            Sample { a: 2, b: (0..500).collect() },
            big_sample(),
        ];
        for codec in compressing() {
            for value in &values {
                let framed = dumps_with(value, WriteOptions::new().codec(codec)).unwrap();
                let err = loads::<Sample>(&framed[..framed.len() - 1]).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::CorruptFrame, "{codec} {}: {err}", value.b.len());
            }
        }
    }

    #[test]
    fn header_without_payload_is_corrupt_for_compressing_codecs() {
        for codec in compressing() {
            let framed = encode_header(codec as u8, FORMAT_VERSION, 0);
            let err = loads::<Sample>(&framed).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CorruptFrame, "{codec}");
        }
    }

    #[test]
    fn garbage_payload_is_corrupt() {
        let magic_checked = [CodecId::Zstd, CodecId::Zlib, CodecId::Lzma, CodecId::Lz4];
        for codec in available().into_iter().filter(|c| magic_checked.contains(c)) {
            let mut framed = encode_header(codec as u8, FORMAT_VERSION, 0).to_vec();
            framed.extend_from_slice(&[0xA5; 64]);
            let err = loads::<Sample>(&framed).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CorruptFrame, "{codec}");
        }
    }

    #[test]
    fn level_byte_is_not_consulted_on_read() {
        let value = big_sample();
        for codec in available() {
            let mut framed = dumps_with(&value, WriteOptions::new().codec(codec)).unwrap();
            framed[offsets::LEVEL] = 0xFF;
            assert_eq!(loads::<Sample>(&framed).unwrap(), value, "{codec}");
        }
    }

    #[test]
    fn serializer_errors_propagate() {
        let err = FramedSerializer::new(Json).loads::<Sample>(b"not json at all").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

// ## 4️⃣ Write-path errors

    #[test]
    fn out_of_range_levels_are_rejected_not_clamped() {
        let cases = [
            (CodecId::Zstd, 0),
            (CodecId::Zstd, 23),
            (CodecId::Brotli, 12),
            (CodecId::Zlib, 10),
            (CodecId::Lzma, -1),
            (CodecId::Lz4, 1),
            (CodecId::None, 1),
        ];
        for (codec, level) in cases.into_iter().filter(|(c, _)| c.is_built_in()) {
            let mut sink = Vec::new();
            let err = zserde_core::dump_with(&big_sample(), &mut sink, WriteOptions::new().codec(codec).level(level))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidLevel, "{codec} {level}");
            assert!(sink.is_empty(), "nothing may be written on error");
        }
    }

    #[test]
    fn codec_absent_from_registry_is_unavailable() {
        let fs = FramedSerializer::default()
            .with_registry(Arc::new(CodecRegistry::from_codecs(Vec::new())));
        for codec in CodecId::ALL.into_iter().filter(|c| *c != CodecId::None) {
            let err = fs.dumps_with(&1u8, WriteOptions::new().codec(codec)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CodecUnavailable, "{codec}");
        }
    }

// ## 5️⃣ Configuration

    #[test]
    fn min_size_controls_the_default_path() {
        let value = big_sample();
        let raw_len = Bincode.serialize(&value).unwrap().len();

        let skip = FramedSerializer::default().with_config(Config::default().with_min_size(raw_len + 1));
        let framed = skip.dumps(&value).unwrap();
        assert_eq!(framed[offsets::CODEC_ID], CodecId::None as u8);

        let compress = FramedSerializer::default().with_config(Config::default().with_min_size(raw_len));
        let framed = compress.dumps(&value).unwrap();
        assert_eq!(framed[offsets::CODEC_ID], compress.registry().default_codec().id() as u8);
    }

    #[test]
    fn configured_codec_and_level_apply_when_call_names_none() {
        for codec in available() {
            let level = i32::from(FramedSerializer::default().registry().resolve_id(codec).unwrap().levels().max);
            let fs = FramedSerializer::default()
                .with_config(Config::default().with_codec(codec).with_level(level).with_min_size(0));
            let framed = fs.dumps(&big_sample()).unwrap();
            assert_eq!(framed[offsets::CODEC_ID], codec as u8);
            assert_eq!(i32::from(framed[offsets::LEVEL]), level);
        }
    }

    #[test]
    fn config_loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "codec = \"none\"\nmin_size = 0\nchunk_size = 512").unwrap();
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.codec, Some(CodecId::None));
        assert_eq!(cfg.chunk_size, 512);

        let err = Config::load(file.path().with_extension("missing")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

// ## 6️⃣ Files, readers and streaming

    #[test]
    fn dump_and_load_through_a_file() {
        let value = big_sample();
        let mut file = tempfile::tempfile().unwrap();
        dump(&value, &mut file).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(load::<Sample, _>(&mut file).unwrap(), value);
    }

    #[test]
    fn load_accepts_non_seekable_readers() {
        let value = big_sample();
        let framed = dumps(&value).unwrap();
        let reader = Dribble { inner: Cursor::new(framed.clone()), step: 3 };
        assert_eq!(load::<Sample, _>(reader).unwrap(), value);

        let reader = Dribble { inner: Cursor::new(framed), step: 5 };
        assert_eq!(load_streaming::<Sample, _>(reader).unwrap(), value);
    }

    #[test]
    fn streaming_frames_read_back_with_every_codec() {
        let value = big_sample();
        let fs = FramedSerializer::default().with_config(Config::default().with_chunk_size(1000));
        for codec in available() {
            let mut sink = Vec::new();
            let stats = fs.dump_streaming(&value, &mut sink, WriteOptions::new().codec(codec)).unwrap();
            assert_eq!(stats.framed_len(), sink.len() as u64, "{codec}");
            assert_eq!(stats.codec, codec);
            assert_eq!(fs.loads::<Sample>(&sink).unwrap(), value, "{codec}");
            assert_eq!(fs.load_streaming::<Sample, _>(Cursor::new(sink)).unwrap(), value, "{codec}");
        }
    }

    #[test]
    fn streaming_identity_frame_matches_buffered() {
        let value = big_sample();
        let fs = FramedSerializer::default().with_config(Config::default().with_chunk_size(7));
        let opts = WriteOptions::new().codec(CodecId::None);
        let mut streamed = Vec::new();
        fs.dump_streaming(&value, &mut streamed, opts).unwrap();
        assert_eq!(streamed, fs.dumps_with(&value, opts).unwrap());
    }

    #[test]
    fn failing_sink_is_io_wherever_it_fails() {
        let value = big_sample();
        let fs = FramedSerializer::default().with_config(Config::default().with_chunk_size(1000));
        for codec in available() {
            for room in [3, HEADER_LEN + 13] {
                let sink = Full { room };
                let err = fs.dump_streaming(&value, sink, WriteOptions::new().codec(codec)).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Io, "{codec} room {room}: {err}");
                assert!(err.to_string().contains("disk full"), "{codec}: {err}");
            }
        }
    }

    #[test]
    fn failing_sink_on_buffered_dump_is_io() {
        let err = dump(&big_sample(), Full { room: 10 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn streaming_rejects_bad_chunk_size() {
        let fs = FramedSerializer::default().with_config(Config::default().with_chunk_size(0));
        let err = fs.dump_streaming(&1u8, Vec::new(), WriteOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        let err = fs.load_streaming::<u8, _>(Cursor::new(vec![1u8])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

// ## 7️⃣ Other serializers, stats and threads

    #[test]
    fn json_serializer_frames_round_trip() {
        let fs = FramedSerializer::new(Json);
        let value = big_sample();
        for codec in available() {
            let framed = fs.dumps_with(&value, WriteOptions::new().codec(codec)).unwrap();
            assert_eq!(fs.loads::<Sample>(&framed).unwrap(), value);
        }
        let raw = Json.serialize(&value).unwrap();
        let identity = fs.dumps_with(&value, WriteOptions::new().codec(CodecId::None)).unwrap();
        assert_eq!(identity[HEADER_LEN..], raw[..]);
    }

    #[test]
    fn stats_accumulate_into_counters() {
        let fs = FramedSerializer::default();
        let mut counters = FrameCounters::default();
        let mut written = 0u64;
        for codec in available() {
            let (framed, stats) = fs.dumps_with_stats(&big_sample(), WriteOptions::new().codec(codec)).unwrap();
            assert_eq!(stats.framed_len(), framed.len() as u64);
            written += framed.len() as u64;
            counters.record(&stats);
        }
        assert_eq!(counters.frames, available().len() as u64);
        assert_eq!(counters.output_bytes(), written);
        assert_eq!(counters.frames_by_codec.get(&CodecId::None), Some(&1));
    }

    #[test]
    fn one_instance_serves_many_threads() {
        let fs = FramedSerializer::default();
        let codecs = available();
        std::thread::scope(|s| {
            for (i, codec) in codecs.iter().copied().enumerate() {
                let fs = &fs;
                s.spawn(move || {
                    let value = Sample { a: i as u32, b: (0..5_000).map(|n| n % 13).collect() };
                    for _ in 0..8 {
                        let framed = fs.dumps_with(&value, WriteOptions::new().codec(codec)).unwrap();
                        assert_eq!(fs.loads::<Sample>(&framed).unwrap(), value);
                    }
                });
            }
        });
    }
}
