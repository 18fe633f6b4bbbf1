//! Clock identifiers and kernel clock-adjustment constants.
//!
//! Primary Source References:
//! - glibc 2.22: bits/time.h
//! - glibc 2.22: bits/timex.h
//! - glibc 2.22: time.h

// ===== Clock Identifiers =====
// Source: bits/time.h
pub const CLOCK_REALTIME: i32 = 0; // System-wide wall clock
pub const CLOCK_MONOTONIC: i32 = 1; // Monotonic since some unspecified start
pub const CLOCK_PROCESS_CPUTIME_ID: i32 = 2; // CPU time of the process
pub const CLOCK_THREAD_CPUTIME_ID: i32 = 3; // CPU time of the thread
pub const CLOCK_MONOTONIC_RAW: i32 = 4; // Monotonic, not NTP-adjusted
pub const CLOCK_REALTIME_COARSE: i32 = 5; // Faster, lower resolution
pub const CLOCK_MONOTONIC_COARSE: i32 = 6;
pub const CLOCK_BOOTTIME: i32 = 7; // Monotonic including suspend time
pub const CLOCK_REALTIME_ALARM: i32 = 8;
pub const CLOCK_BOOTTIME_ALARM: i32 = 9;
pub const CLOCK_TAI: i32 = 11; // International Atomic Time

pub const TIMER_ABSTIME: i32 = 1; // Flag for absolute timer expirations
pub const TIME_UTC: i32 = 1; // timespec_get time base

// ===== adjtimex Mode Bits =====
// Source: bits/timex.h
pub const ADJ_OFFSET: i32 = 0x0001; // Time offset
pub const ADJ_FREQUENCY: i32 = 0x0002; // Frequency offset
pub const ADJ_MAXERROR: i32 = 0x0004; // Maximum time error
pub const ADJ_ESTERROR: i32 = 0x0008; // Estimated time error
pub const ADJ_STATUS: i32 = 0x0010; // Clock status
pub const ADJ_TIMECONST: i32 = 0x0020; // PLL time constant
pub const ADJ_TAI: i32 = 0x0080; // Set TAI offset
pub const ADJ_SETOFFSET: i32 = 0x0100; // Add offset atomically
pub const ADJ_MICRO: i32 = 0x1000; // Select microsecond resolution
pub const ADJ_NANO: i32 = 0x2000; // Select nanosecond resolution
pub const ADJ_TICK: i32 = 0x4000; // Tick value
pub const ADJ_OFFSET_SINGLESHOT: i32 = 0x8001; // Old-fashioned adjtime
pub const ADJ_OFFSET_SS_READ: i32 = 0xa001; // Read-only adjtime

// Older symbols for the same bits
pub const MOD_OFFSET: i32 = ADJ_OFFSET;
pub const MOD_FREQUENCY: i32 = ADJ_FREQUENCY;
pub const MOD_MAXERROR: i32 = ADJ_MAXERROR;
pub const MOD_ESTERROR: i32 = ADJ_ESTERROR;
pub const MOD_STATUS: i32 = ADJ_STATUS;
pub const MOD_TIMECONST: i32 = ADJ_TIMECONST;
pub const MOD_CLKB: i32 = ADJ_TICK;
pub const MOD_CLKA: i32 = ADJ_OFFSET_SINGLESHOT;
pub const MOD_TAI: i32 = ADJ_TAI;
pub const MOD_MICRO: i32 = ADJ_MICRO;
pub const MOD_NANO: i32 = ADJ_NANO;

// ===== Clock Status Bits =====
// Source: bits/timex.h
pub const STA_PLL: i32 = 0x0001; // Enable PLL updates
pub const STA_PPSFREQ: i32 = 0x0002; // Enable PPS freq discipline
pub const STA_PPSTIME: i32 = 0x0004; // Enable PPS time discipline
pub const STA_FLL: i32 = 0x0008; // Select frequency-lock mode
pub const STA_INS: i32 = 0x0010; // Insert leap second
pub const STA_DEL: i32 = 0x0020; // Delete leap second
pub const STA_UNSYNC: i32 = 0x0040; // Clock unsynchronized
pub const STA_FREQHOLD: i32 = 0x0080; // Hold frequency
pub const STA_PPSSIGNAL: i32 = 0x0100; // PPS signal present (ro)
pub const STA_PPSJITTER: i32 = 0x0200; // PPS signal jitter exceeded (ro)
pub const STA_PPSWANDER: i32 = 0x0400; // PPS signal wander exceeded (ro)
pub const STA_PPSERROR: i32 = 0x0800; // PPS signal calibration error (ro)
pub const STA_CLOCKERR: i32 = 0x1000; // Clock hardware fault (ro)
pub const STA_NANO: i32 = 0x2000; // Resolution, 0 = us, 1 = ns (ro)
pub const STA_MODE: i32 = 0x4000; // Mode, 0 = PLL, 1 = FLL (ro)
pub const STA_CLK: i32 = 0x8000; // Clock source, 0 = A, 1 = B (ro)

// Read-only bits
pub const STA_RONLY: i32 = STA_PPSSIGNAL
    | STA_PPSJITTER
    | STA_PPSWANDER
    | STA_PPSERROR
    | STA_CLOCKERR
    | STA_NANO
    | STA_MODE
    | STA_CLK;
