/*
 * Responsibility
 * - middleware の公開インターフェース
 */
pub mod cors;
pub mod http;
