//! The vector kernel applied over packed `xyzw` slices.
//!
//! A `[f32]` of length `4 * n` is viewed as `n` consecutive vectors. Operations run in
//! place; the `par_*` variants split the slice into [`PARALLEL_CHUNK_SIZE`]-float
//! chunks on the rayon pool once the slice reaches [`PARALLEL_THRESHOLD`] floats and
//! stay sequential below it. Each vector is processed independently, so sequential and
//! parallel runs produce identical bits.
//!
//! # Example
//!
//! ```
//! use simdly_vec4::batch::Vector4Batch;
//! use simdly_vec4::vector4f::vector_abs;
//!
//! let mut data = vec![-1.0, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0, 8.0];
//! data.par_map_vectors(vector_abs).unwrap();
//! assert_eq!(data, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//! ```

use rayon::prelude::*;

use crate::error::{length_error, mismatch_error, validation_error, Result};
use crate::simd::{backend_name, traits::SimdVector4};
use crate::vector4f::{vector_cos, vector_lerp, vector_normalize3, vector_round_bankers, vector_sin};
use crate::Vector4f;

/// Floats per packed vector.
pub const LANES: usize = 4;

/// Minimum slice length, in floats, before the `par_*` variants use rayon.
pub const PARALLEL_THRESHOLD: usize = 262_144;

/// Floats per rayon task.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;

/// In-place kernel application over packed `xyzw` records.
pub trait Vector4Batch {
    /// Number of packed vectors, or an error if the length is not a multiple of 4.
    fn vector_count(&self) -> Result<usize>;

    /// Replaces every vector `v` with `op(v)`.
    fn map_vectors<F>(&mut self, op: F) -> Result<()>
    where
        F: Fn(Vector4f) -> Vector4f;

    /// Parallel [`Vector4Batch::map_vectors`].
    fn par_map_vectors<F>(&mut self, op: F) -> Result<()>
    where
        F: Fn(Vector4f) -> Vector4f + Send + Sync;

    /// Replaces every vector `v` with `op(v, r)`, `r` being the vector at the same
    /// position in `rhs`.
    fn zip_map_vectors<F>(&mut self, rhs: &[f32], op: F) -> Result<()>
    where
        F: Fn(Vector4f, Vector4f) -> Vector4f;

    /// Parallel [`Vector4Batch::zip_map_vectors`].
    fn par_zip_map_vectors<F>(&mut self, rhs: &[f32], op: F) -> Result<()>
    where
        F: Fn(Vector4f, Vector4f) -> Vector4f + Send + Sync;
}

#[inline(always)]
fn check_packed(len: usize) -> Result<usize> {
    if len % LANES != 0 {
        return Err(length_error(len, LANES));
    }
    Ok(len / LANES)
}

#[inline(always)]
fn check_operands(lhs: &[f32], rhs: &[f32]) -> Result<usize> {
    let count = check_packed(lhs.len())?;
    if rhs.len() != lhs.len() {
        return Err(mismatch_error(lhs.len(), rhs.len()));
    }
    Ok(count)
}

#[inline(always)]
fn chunk_size() -> usize {
    ((PARALLEL_CHUNK_SIZE / LANES) * LANES).max(LANES)
}

#[inline(always)]
fn map_block<F>(block: &mut [f32], op: &F)
where
    F: Fn(Vector4f) -> Vector4f,
{
    for record in block.chunks_exact_mut(LANES) {
        // chunks_exact_mut yields exactly LANES floats
        let input = unsafe { Vector4f::load_ptr(record.as_ptr()) };
        record.copy_from_slice(&op(input).to_array());
    }
}

#[inline(always)]
fn zip_map_block<F>(block: &mut [f32], rhs: &[f32], op: &F)
where
    F: Fn(Vector4f, Vector4f) -> Vector4f,
{
    for (record, rhs_record) in block
        .chunks_exact_mut(LANES)
        .zip(rhs.chunks_exact(LANES))
    {
        let (lhs, rhs) = unsafe {
            (
                Vector4f::load_ptr(record.as_ptr()),
                Vector4f::load_ptr(rhs_record.as_ptr()),
            )
        };
        record.copy_from_slice(&op(lhs, rhs).to_array());
    }
}

impl Vector4Batch for [f32] {
    fn vector_count(&self) -> Result<usize> {
        check_packed(self.len())
    }

    fn map_vectors<F>(&mut self, op: F) -> Result<()>
    where
        F: Fn(Vector4f) -> Vector4f,
    {
        let count = check_packed(self.len())?;
        log::debug!(
            "map_vectors: {} vectors on {} (sequential)",
            count,
            backend_name()
        );

        map_block(self, &op);
        Ok(())
    }

    fn par_map_vectors<F>(&mut self, op: F) -> Result<()>
    where
        F: Fn(Vector4f) -> Vector4f + Send + Sync,
    {
        let count = check_packed(self.len())?;

        if self.len() < PARALLEL_THRESHOLD {
            log::debug!(
                "par_map_vectors: {} vectors below threshold, running sequentially on {}",
                count,
                backend_name()
            );
            map_block(self, &op);
            return Ok(());
        }

        let chunk_size = chunk_size();
        log::debug!(
            "par_map_vectors: {} vectors on {} (parallel)",
            count,
            backend_name()
        );
        log::trace!(
            "par_map_vectors: {} floats per task, {} tasks",
            chunk_size,
            self.len().div_ceil(chunk_size)
        );

        self.par_chunks_mut(chunk_size)
            .for_each(|block| map_block(block, &op));
        Ok(())
    }

    fn zip_map_vectors<F>(&mut self, rhs: &[f32], op: F) -> Result<()>
    where
        F: Fn(Vector4f, Vector4f) -> Vector4f,
    {
        let count = check_operands(self, rhs)?;
        log::debug!(
            "zip_map_vectors: {} vectors on {} (sequential)",
            count,
            backend_name()
        );

        zip_map_block(self, rhs, &op);
        Ok(())
    }

    fn par_zip_map_vectors<F>(&mut self, rhs: &[f32], op: F) -> Result<()>
    where
        F: Fn(Vector4f, Vector4f) -> Vector4f + Send + Sync,
    {
        let count = check_operands(self, rhs)?;

        if self.len() < PARALLEL_THRESHOLD {
            log::debug!(
                "par_zip_map_vectors: {} vectors below threshold, running sequentially on {}",
                count,
                backend_name()
            );
            zip_map_block(self, rhs, &op);
            return Ok(());
        }

        let chunk_size = chunk_size();
        log::debug!(
            "par_zip_map_vectors: {} vectors on {} (parallel)",
            count,
            backend_name()
        );
        log::trace!(
            "par_zip_map_vectors: {} floats per task, {} tasks",
            chunk_size,
            self.len().div_ceil(chunk_size)
        );

        self.par_chunks_mut(chunk_size)
            .zip(rhs.par_chunks(chunk_size))
            .for_each(|(block, rhs_block)| zip_map_block(block, rhs_block, &op));
        Ok(())
    }
}

/// Normalizes the xyz part of every vector, writing `fallback` where the squared
/// length is below `threshold`.
///
/// # Errors
///
/// [`crate::error::Vec4Error::ValidationError`] if `threshold` is negative or NaN,
/// [`crate::error::Vec4Error::LengthNotMultipleOfLanes`] for a ragged slice.
pub fn batch_normalize3(data: &mut [f32], fallback: Vector4f, threshold: f32) -> Result<()> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(validation_error(format!(
            "normalize threshold must be a non-negative number, got {threshold}"
        )));
    }

    data.par_map_vectors(|input| vector_normalize3(input, fallback, threshold))
}

/// Interpolates every vector of `data` toward the matching vector of `end`.
pub fn batch_lerp(data: &mut [f32], end: &[f32], alpha: f32) -> Result<()> {
    data.par_zip_map_vectors(end, |start, end| vector_lerp(start, end, alpha))
}

pub fn batch_sin(data: &mut [f32]) -> Result<()> {
    data.par_map_vectors(vector_sin)
}

pub fn batch_cos(data: &mut [f32]) -> Result<()> {
    data.par_map_vectors(vector_cos)
}

pub fn batch_round_bankers(data: &mut [f32]) -> Result<()> {
    data.par_map_vectors(vector_round_bankers)
}
