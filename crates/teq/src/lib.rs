//! teq: translation equivalents for parallel corpora.
//!
//! teq works on sentence-aligned multilingual corpora in the
//! paralleltext format, where every file carries the same sentence
//! identifiers. A regex search over one language (`teq search`) yields a
//! weighted context list marking where a phenomenon occurs; scoring that
//! context against files in other languages (`teq find`) surfaces the
//! words, morphemes, or multi-word units most likely to translate it;
//! `teq show` renders the aligned sentences for manual inspection.

#![warn(missing_docs)]

pub mod cli;
