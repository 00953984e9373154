//! Sign-change scan with bisection refinement.
//!
//! Shared by the altitude-crossing search (rise/set) and by the angular
//! boundary search of the panchang elements.

/// Which sign changes count as a crossing, in time order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Either direction.
    Any,
    /// f goes from negative to non-negative as time increases.
    Rising,
    /// f goes from non-negative to negative as time increases.
    Falling,
}

/// Largest jump between adjacent samples still treated as continuous.
///
/// Wrapped angle functions jump by ~360° at the ±180° seam; those sign
/// changes are not zeros.
const MAX_CONTINUOUS_JUMP: f64 = 180.0;

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

fn matches(crossing: Crossing, f_early: f64, f_late: f64) -> bool {
    if (f_early - f_late).abs() >= MAX_CONTINUOUS_JUMP {
        return false;
    }
    let rising = f_early < 0.0 && f_late >= 0.0;
    let falling = f_early >= 0.0 && f_late < 0.0;
    match crossing {
        Crossing::Any => rising || falling,
        Crossing::Rising => rising,
        Crossing::Falling => falling,
    }
}

/// Find the first zero of `f` reached by stepping from `t_start` by `step`
/// (negative to search backwards), up to `max_steps` steps.
///
/// The bracket is refined by bisection until it is narrower than `tol`
/// or `max_iter` halvings have been made. Units of `t`, `step` and `tol`
/// are the caller's.
pub fn find_crossing<F, E>(
    f: F,
    t_start: f64,
    step: f64,
    max_steps: usize,
    crossing: Crossing,
    max_iter: usize,
    tol: f64,
) -> Result<Option<f64>, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let mut t_a = t_start;
    let mut f_a = f(t_a)?;

    for _ in 0..max_steps {
        let t_b = t_a + step;
        let f_b = f(t_b)?;

        let hit = if step > 0.0 {
            matches(crossing, f_a, f_b)
        } else {
            matches(crossing, f_b, f_a)
        };
        if hit {
            let (lo, f_lo, hi) = if t_a < t_b {
                (t_a, f_a, t_b)
            } else {
                (t_b, f_b, t_a)
            };
            return bisect(&f, lo, f_lo < 0.0, hi, max_iter, tol).map(Some);
        }

        t_a = t_b;
        f_a = f_b;
    }
    Ok(None)
}

fn bisect<F, E>(
    f: &F,
    mut t_lo: f64,
    lo_negative: bool,
    mut t_hi: f64,
    max_iter: usize,
    tol: f64,
) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    for _ in 0..max_iter {
        if (t_hi - t_lo).abs() < tol {
            break;
        }
        let t_mid = 0.5 * (t_lo + t_hi);
        let f_mid = f(t_mid)?;
        if (f_mid < 0.0) == lo_negative {
            t_lo = t_mid;
        } else {
            t_hi = t_mid;
        }
    }
    Ok(0.5 * (t_lo + t_hi))
}
