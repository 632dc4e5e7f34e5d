use rand::Rng;

use crate::config::Quirks;
use crate::constants::{FONT_GLYPH_SIZE, FONT_START};
use crate::error::Result;
use crate::state::State;

/// if condition then pc += 2
fn skip_if(state: &State, condition: bool) -> State {
    let pc = if condition {
        state.pc + 0x4
    } else {
        state.pc + 0x2
    };
    State { pc, ..*state }
}

/// machine code routine; nothing to run it on, so skip it
pub fn sys(state: &State) -> State {
    State {
        pc: state.pc + 0x2,
        ..*state
    }
}

/// clear
pub fn clr(state: &State) -> State {
    let mut display = state.display;
    display.clear();
    State {
        pc: state.pc + 0x2,
        display,
        draw_flag: true,
        ..*state
    }
}

/// PC = STACK.pop()
pub fn rts(state: &State) -> Result<State> {
    let mut next = *state;
    next.pc = next.pop()?;
    Ok(next)
}

/// PC = addr
pub fn jump(state: &State, addr: u16) -> State {
    State {
        pc: addr,
        ..*state
    }
}

/// STACK.push(PC + 2); PC = addr
pub fn call(state: &State, addr: u16) -> Result<State> {
    let mut next = *state;
    next.push(state.pc + 0x2)?;
    next.pc = addr;
    Ok(next)
}

/// if Vx == kk then pc += 2
pub fn ske(state: &State, x: u8, kk: u8) -> State {
    skip_if(state, state.v[x as usize] == kk)
}

/// if Vx != kk then pc += 2
pub fn skne(state: &State, x: u8, kk: u8) -> State {
    skip_if(state, state.v[x as usize] != kk)
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &State, x: u8, y: u8) -> State {
    skip_if(state, state.v[x as usize] == state.v[y as usize])
}

/// Vx = kk
pub fn load(state: &State, x: u8, kk: u8) -> State {
    let mut v = state.v;
    v[x as usize] = kk;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx += kk
/// Overflow wraps and VF is left alone
pub fn add(state: &State, x: u8, kk: u8) -> State {
    let mut v = state.v;
    v[x as usize] = v[x as usize].wrapping_add(kk);
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx = Vy
pub fn mv(state: &State, x: u8, y: u8) -> State {
    let mut v = state.v;
    v[x as usize] = v[y as usize];
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx = Vx <op> Vy; VF = 0 with the vf_reset quirk
fn logical(state: &State, x: u8, y: u8, quirks: &Quirks, op: fn(u8, u8) -> u8) -> State {
    let mut v = state.v;
    v[x as usize] = op(v[x as usize], v[y as usize]);
    if quirks.vf_reset {
        v[0xF] = 0x0;
    }
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx |= Vy
pub fn or(state: &State, x: u8, y: u8, quirks: &Quirks) -> State {
    logical(state, x, y, quirks, |a, b| a | b)
}

/// Vx &= Vy
pub fn and(state: &State, x: u8, y: u8, quirks: &Quirks) -> State {
    logical(state, x, y, quirks, |a, b| a & b)
}

/// Vx ^= Vy
pub fn xor(state: &State, x: u8, y: u8, quirks: &Quirks) -> State {
    logical(state, x, y, quirks, |a, b| a ^ b)
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &State, x: u8, y: u8) -> State {
    let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    let mut v = state.v;
    v[0xF] = over as u8;
    v[x as usize] = res;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &State, x: u8, y: u8) -> State {
    let (res, under) = state.v[x as usize].overflowing_sub(state.v[y as usize]);
    let mut v = state.v;
    v[0xF] = !under as u8;
    v[x as usize] = res;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &State, x: u8, y: u8) -> State {
    let (res, under) = state.v[y as usize].overflowing_sub(state.v[x as usize]);
    let mut v = state.v;
    v[0xF] = !under as u8;
    v[x as usize] = res;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// The register a shift reads from
fn shift_source(state: &State, x: u8, y: u8, quirks: &Quirks) -> u8 {
    if quirks.shift_uses_vy {
        state.v[y as usize]
    } else {
        state.v[x as usize]
    }
}

/// VF = lsb; Vx >>= 1
pub fn shr(state: &State, x: u8, y: u8, quirks: &Quirks) -> State {
    let source = shift_source(state, x, y, quirks);
    let mut v = state.v;
    v[0xF] = source & 0x1;
    v[x as usize] = source >> 1;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// VF = msb; Vx <<= 1
pub fn shl(state: &State, x: u8, y: u8, quirks: &Quirks) -> State {
    let source = shift_source(state, x, y, quirks);
    let mut v = state.v;
    v[0xF] = source >> 7;
    v[x as usize] = source << 1;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &State, x: u8, y: u8) -> State {
    skip_if(state, state.v[x as usize] != state.v[y as usize])
}

/// I = addr
pub fn loadi(state: &State, addr: u16) -> State {
    State {
        pc: state.pc + 0x2,
        i: addr,
        ..*state
    }
}

/// PC = V0 + addr
/// May land past the end of memory, which the next fetch reports
pub fn jumpi(state: &State, addr: u16) -> State {
    State {
        pc: u16::from(state.v[0x0]) + addr,
        ..*state
    }
}

/// Vx = rand_byte & kk
pub fn rnd<R: Rng + ?Sized>(state: &State, x: u8, kk: u8, rng: &mut R) -> State {
    let rand_byte: u8 = rng.gen();
    let mut v = state.v;
    v[x as usize] = rand_byte & kk;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite at mem[I..I+n] onto the display at (Vx, Vy).
/// VF = 1 if any pixel was erased
pub fn draw(state: &State, x: u8, y: u8, n: u8, quirks: &Quirks) -> Result<State> {
    let sprite = &state.memory[state.span(state.i as usize, n as usize)?];
    let (px, py) = (state.v[x as usize] as usize, state.v[y as usize] as usize);

    let mut display = state.display;
    let collision = if quirks.clip_sprites {
        display.draw_sprite_clipped(px, py, sprite)
    } else {
        display.draw_sprite(px, py, sprite)
    };

    let mut v = state.v;
    v[0xF] = collision as u8;
    Ok(State {
        pc: state.pc + 0x2,
        draw_flag: true,
        v,
        display,
        ..*state
    })
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &State, x: u8) -> State {
    skip_if(state, state.keypad.is_pressed(state.v[x as usize]))
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &State, x: u8) -> State {
    skip_if(state, !state.keypad.is_pressed(state.v[x as usize]))
}

/// Vx = DT
pub fn moved(state: &State, x: u8) -> State {
    let mut v = state.v;
    v[x as usize] = state.timers.delay();
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// await keypress for Vx
/// The pc stays put until a key is held, so the instruction runs again on every step.
/// Checks whether any key is held right now, not whether a new press arrived since the wait began.
pub fn keyd(state: &State, x: u8) -> State {
    match state.keypad.any_pressed() {
        Some(key) => {
            let mut v = state.v;
            v[x as usize] = key;
            State {
                pc: state.pc + 0x2,
                v,
                register_needing_key: None,
                ..*state
            }
        }
        None => State {
            register_needing_key: Some(x),
            ..*state
        },
    }
}

/// DT = Vx
pub fn loads(state: &State, x: u8) -> State {
    let mut timers = state.timers;
    timers.set_delay(state.v[x as usize]);
    State {
        pc: state.pc + 0x2,
        timers,
        ..*state
    }
}

/// ST = Vx
pub fn ld(state: &State, x: u8) -> State {
    let mut timers = state.timers;
    timers.set_sound(state.v[x as usize]);
    State {
        pc: state.pc + 0x2,
        timers,
        ..*state
    }
}

/// I += Vx
pub fn addi(state: &State, x: u8) -> State {
    State {
        pc: state.pc + 0x2,
        i: state.i.wrapping_add(u16::from(state.v[x as usize])),
        ..*state
    }
}

/// I = address of the font glyph for the low nibble of Vx
pub fn ldspr(state: &State, x: u8) -> State {
    let digit = u16::from(state.v[x as usize] & 0xF);
    State {
        pc: state.pc + 0x2,
        i: FONT_START + digit * FONT_GLYPH_SIZE,
        ..*state
    }
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &State, x: u8) -> Result<State> {
    let value = state.v[x as usize];
    let digits = [value / 100, value / 10 % 10, value % 10];
    let at = state.span(state.i as usize, digits.len())?;
    let mut memory = state.memory;
    memory[at].copy_from_slice(&digits);
    Ok(State {
        pc: state.pc + 0x2,
        memory,
        ..*state
    })
}

/// I after a V0..=Vx block transfer
fn index_after_transfer(state: &State, x: u8, quirks: &Quirks) -> u16 {
    if quirks.increment_index {
        state.i.wrapping_add(u16::from(x) + 1)
    } else {
        state.i
    }
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &State, x: u8, quirks: &Quirks) -> Result<State> {
    let count = x as usize + 1;
    let at = state.span(state.i as usize, count)?;
    let mut memory = state.memory;
    memory[at].copy_from_slice(&state.v[..count]);
    Ok(State {
        pc: state.pc + 0x2,
        i: index_after_transfer(state, x, quirks),
        memory,
        ..*state
    })
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &State, x: u8, quirks: &Quirks) -> Result<State> {
    let count = x as usize + 1;
    let at = state.span(state.i as usize, count)?;
    let mut v = state.v;
    v[..count].copy_from_slice(&state.memory[at]);
    Ok(State {
        pc: state.pc + 0x2,
        i: index_after_transfer(state, x, quirks),
        v,
        ..*state
    })
}
