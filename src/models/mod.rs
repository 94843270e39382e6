//! # 데이터 모델 모듈
//!
//! - `snippet`: 스니펫(Snippet)과 생성 요청 구조체
//! - `tag`: 태그(Tag)와 태그 연결 요청 구조체

pub mod snippet;
pub mod tag;

pub use snippet::*;
pub use tag::*;
