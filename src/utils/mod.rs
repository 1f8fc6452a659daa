//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 이메일 정규화, id 파싱, 검색어 이스케이프, 인증 코드 생성

pub mod string_utils;
