//! Hole stitching: fold hole loops into the outer path.
//!
//! Each hole is entered from its top-left vertex `H0`. The stitcher looks
//! straight up from `H0` for the nearest horizontal segment of the current
//! path, drops a vertical bridge from that segment to `H0`, walks the hole
//! once and climbs back along the same bridge. The bridge is traversed once
//! in each direction, so it adds no area and the result is still a single
//! closed path.
//!
//! Holes are processed top to bottom, so later holes may attach to the
//! bottom edge of an earlier one.

use gridtrace_core::{Heading, Loop, OutlineError, Vertex};

/// Where the bridge meets the attachment segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// The bridge meets the segment strictly between its endpoints; a new
    /// vertex is inserted on both sides of the hole tour.
    Split,
    /// The bridge leaves from the segment's start vertex.
    AtStart,
    /// The bridge leaves from the segment's end vertex.
    AtEnd,
}

/// A resolved attachment point on the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridge {
    /// Index of the segment start in the path; the segment ends at the
    /// following vertex, wrapping at the end.
    pub segment: usize,
    /// Top of the bridge, on the segment.
    pub vertex: Vertex,
    /// How the bridge meets the segment.
    pub kind: Attachment,
}

/// Find the horizontal segment of `path` directly above `entry`.
///
/// Candidates are horizontal segments whose x-range contains `entry.x`
/// and that lie strictly above `entry`. The lowest one wins; ties prefer
/// a segment that `entry.x` falls strictly inside, then the lower index.
pub fn find_attachment(path: &[Vertex], entry: Vertex) -> Option<Bridge> {
    let n = path.len();
    let mut best: Option<(usize, i64, bool)> = None;
    for i in 0..n {
        let a = path[i];
        let b = path[(i + 1) % n];
        if a.z != b.z || a.x == b.x || a.z >= entry.z {
            continue;
        }
        let (lo, hi) = (a.x.min(b.x), a.x.max(b.x));
        if entry.x < lo || entry.x > hi {
            continue;
        }
        let strict = lo < entry.x && entry.x < hi;
        let better = match best {
            None => true,
            Some((_, z, was_strict)) => a.z > z || (a.z == z && strict && !was_strict),
        };
        if better {
            best = Some((i, a.z, strict));
        }
    }

    let (segment, z, _) = best?;
    let vertex = Vertex::new(entry.x, z);
    let kind = if vertex == path[segment] {
        Attachment::AtStart
    } else if vertex == path[(segment + 1) % n] {
        Attachment::AtEnd
    } else {
        Attachment::Split
    };
    Some(Bridge {
        segment,
        vertex,
        kind,
    })
}

/// Splice one hole into `path`, returning the new simplified path.
///
/// # Errors
///
/// [`OutlineError::HoleAttachment`] if no segment of `path` lies above the
/// hole's entry vertex.
pub fn stitch_hole(path: &[Vertex], hole: &Loop) -> Result<Vec<Vertex>, OutlineError> {
    let entry = hole.start();
    let bridge = find_attachment(path, entry).ok_or(OutlineError::HoleAttachment {
        hole_start: entry,
    })?;

    let mut tour = hole.vertices();
    tour.push(entry);

    let n = path.len();
    let i = bridge.segment;
    let j = (i + 1) % n;
    let b = bridge.vertex;
    let mut spliced = Vec::with_capacity(n + tour.len() + 2);
    match bridge.kind {
        Attachment::Split => {
            spliced.extend_from_slice(&path[..=i]);
            spliced.push(b);
            spliced.extend_from_slice(&tour);
            spliced.push(b);
            spliced.extend_from_slice(&path[i + 1..]);
        }
        Attachment::AtStart => {
            spliced.extend_from_slice(&path[..=i]);
            spliced.extend_from_slice(&tour);
            spliced.push(b);
            spliced.extend_from_slice(&path[i + 1..]);
        }
        Attachment::AtEnd if j != 0 => {
            spliced.extend_from_slice(&path[..=j]);
            spliced.extend_from_slice(&tour);
            spliced.push(b);
            spliced.extend_from_slice(&path[j + 1..]);
        }
        Attachment::AtEnd => {
            // The attachment vertex is path[0]; the wrap-around closes the
            // climb back up the bridge.
            spliced.extend_from_slice(path);
            spliced.push(b);
            spliced.extend_from_slice(&tour);
        }
    }
    Ok(simplify(&spliced))
}

/// Fold every hole into the outer loop, in order.
///
/// # Errors
///
/// Stops at the first hole that cannot be attached.
pub fn stitch_holes(outer: &Loop, holes: &[Loop]) -> Result<Vec<Vertex>, OutlineError> {
    holes
        .iter()
        .try_fold(simplify(&outer.vertices()), |path, hole| stitch_hole(&path, hole))
}

/// Like [`stitch_holes`], but skips holes that cannot be attached.
///
/// Returns the path and the entry vertices of the skipped holes.
pub fn stitch_holes_lenient(outer: &Loop, holes: &[Loop]) -> (Vec<Vertex>, Vec<Vertex>) {
    let mut path = simplify(&outer.vertices());
    let mut dropped = Vec::new();
    for hole in holes {
        match stitch_hole(&path, hole) {
            Ok(next) => path = next,
            Err(_) => dropped.push(hole.start()),
        }
    }
    (path, dropped)
}

/// Whether `b` lies on a straight run from `a` to `c`.
///
/// A reversal (`a → b → a`) is not straight: it is the tip of a bridge and
/// must be kept.
fn is_straight(a: Vertex, b: Vertex, c: Vertex) -> bool {
    match (Heading::between(a, b), Heading::between(b, c)) {
        (Some(first), Some(second)) => first == second,
        _ => false,
    }
}

/// Drop repeated vertices and vertices in the middle of a straight run,
/// treating `path` as closed.
pub fn simplify(path: &[Vertex]) -> Vec<Vertex> {
    let mut out: Vec<Vertex> = Vec::with_capacity(path.len());
    for &v in path {
        if out.last() == Some(&v) {
            continue;
        }
        while out.len() >= 2 && is_straight(out[out.len() - 2], out[out.len() - 1], v) {
            out.pop();
        }
        out.push(v);
    }

    // Seam between the last and first vertex.
    loop {
        let n = out.len();
        if n >= 2 && out[n - 1] == out[0] {
            out.pop();
        } else if n >= 3 && is_straight(out[n - 2], out[n - 1], out[0]) {
            out.pop();
        } else if n >= 3 && is_straight(out[n - 1], out[0], out[1]) {
            out.remove(0);
        } else {
            break;
        }
    }
    out
}
