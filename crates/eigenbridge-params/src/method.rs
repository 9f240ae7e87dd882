// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Enumerated solver parameters.
//!
//! Each enumeration is `#[repr(i32)]` with fixed discriminants so that the
//! integer a foreign caller passes is the integer stored here. Conversions
//! from raw integers go through `TryFrom<i32>` and reject unknown values with
//! [`ParamsError::UnknownEnumerant`](crate::error::ParamsError::UnknownEnumerant).

use crate::error::ParamsError;

macro_rules! c_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// All variants in discriminant order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Returns the integer published for this variant.
            #[inline]
            pub const fn as_raw(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ParamsError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(ParamsError::UnknownEnumerant {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

c_enum! {
    /// Which part of the spectrum the solver looks for.
    Target {
        Smallest = 0 => "smallest",
        Largest = 1 => "largest",
        ClosestGeq = 2 => "closest_geq",
        ClosestLeq = 3 => "closest_leq",
        ClosestAbs = 4 => "closest_abs",
        LargestAbs = 5 => "largest_abs",
    }
}

c_enum! {
    /// How the initial search basis is filled.
    InitBasisMode {
        Krylov = 0 => "krylov",
        Random = 1 => "random",
        User = 2 => "user",
    }
}

c_enum! {
    /// Projection used to extract approximations from the basis.
    Projection {
        RayleighRitz = 0 => "rayleigh_ritz",
        Harmonic = 1 => "harmonic",
        Refined = 2 => "refined",
    }
}

c_enum! {
    /// Restarting scheme.
    RestartScheme {
        Thick = 0 => "thick",
        Dtr = 1 => "dtr",
    }
}

c_enum! {
    /// Stopping criterion for the inner correction equation.
    ConvergenceTest {
        FullLTolerance = 0 => "full_ltolerance",
        DecreasingLTolerance = 1 => "decreasing_ltolerance",
        AdaptiveETilde = 2 => "adaptive_etilde",
        Adaptive = 3 => "adaptive",
    }
}

c_enum! {
    /// Named bundles of parameter defaults, applied by
    /// [`EigenParams::set_method`](crate::params::EigenParams::set_method).
    PresetMethod {
        DefaultMethod = 0 => "default_method",
        Dynamic = 1 => "dynamic",
        DefaultMinTime = 2 => "default_min_time",
        DefaultMinMatvecs = 3 => "default_min_matvecs",
        Arnoldi = 4 => "arnoldi",
        Gd = 5 => "gd",
        GdPlusK = 6 => "gd_plusk",
        GdOlsenPlusK = 7 => "gd_olsen_plusk",
        JdOlsenPlusK = 8 => "jd_olsen_plusk",
        Rqi = 9 => "rqi",
        Jdqr = 10 => "jdqr",
        Jdqmr = 11 => "jdqmr",
        JdqmrETol = 12 => "jdqmr_etol",
        SteepestDescent = 13 => "steepest_descent",
        LobpcgOrthoBasis = 14 => "lobpcg_orthobasis",
        LobpcgOrthoBasisWindow = 15 => "lobpcg_orthobasis_window",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_round_trip_for_every_variant() {
        for t in Target::ALL {
            assert_eq!(Target::try_from(t.as_raw()), Ok(*t));
        }
        for m in PresetMethod::ALL {
            assert_eq!(PresetMethod::try_from(m.as_raw()), Ok(*m));
        }
        assert_eq!(PresetMethod::ALL.len(), 16);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        assert_eq!(
            Target::try_from(6),
            Err(ParamsError::UnknownEnumerant {
                kind: "Target",
                value: 6
            })
        );
        assert_eq!(
            RestartScheme::try_from(-1),
            Err(ParamsError::UnknownEnumerant {
                kind: "RestartScheme",
                value: -1
            })
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(format!("{}", Projection::Harmonic), "harmonic");
        assert_eq!(
            format!("{}", ConvergenceTest::AdaptiveETilde),
            "adaptive_etilde"
        );
        assert_eq!(InitBasisMode::User.as_str(), "user");
    }
}
