//! Ejecución acotada en tiempo de un proceso externo.
//!
//! El proceso hijo se lanza en su propio grupo de procesos con stdin/stdout/
//! stderr en pipe. La escritura de la entrada y la lectura de ambas salidas
//! avanzan a la vez que la espera del proceso, y el plazo cubre solo a este:
//! si vence antes de que termine se mata el grupo completo y se devuelve
//! `HarnessError::Timeout`, nunca salida parcial. Una vez terminado, los
//! pipes tienen `OUTPUT_GRACE` para llegar a EOF; pasado ese margen se mata
//! a los descendientes que aún los retengan y se devuelve lo leído.

use std::future::Future;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin, Command};
use tokio::time::Instant;

use super::CommandSpec;
use crate::errors::HarnessError;

/// Resultado de una única ejecución. Inmutable una vez producido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: i32,
}

impl ProcessOutput {
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Margen para vaciar stdout/stderr tras la salida del proceso.
const OUTPUT_GRACE: Duration = Duration::from_millis(500);

/// Ejecuta `cmd` alimentando `input` por stdin, con un plazo de `timeout`.
///
/// Un solo intento; el llamador decide qué hacer con el fallo.
pub async fn run_bounded(cmd: &CommandSpec,
                         input: Option<&[u8]>,
                         timeout: Duration)
                         -> Result<ProcessOutput, HarnessError> {
    let command = cmd.to_string();
    let mut child = spawn(cmd).map_err(|source| HarnessError::Spawn { command: command.clone(),
                                                                      source })?;
    let pid = child.id();
    debug!("spawned `{command}` (pid {pid:?})");

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let finished = {
        let feed = feed_stdin(child.stdin.take(), input.unwrap_or_default().to_vec());
        let out = drain(child.stdout.take(), &mut stdout);
        let err = drain(child.stderr.take(), &mut stderr);
        let pipes = async { tokio::try_join!(feed, out, err).map(|_| ()) };
        wait_with_deadline(&mut child, pipes, timeout, pid).await
    };

    match finished {
        Ok(Some(status)) => {
            let exit_code = exit_code(status);
            debug!("`{command}` exited with {exit_code}");
            Ok(ProcessOutput { stdout,
                               stderr,
                               exit_code })
        }
        Ok(None) => {
            warn!("`{command}` exceeded {timeout:?}, killing process group");
            terminate(&mut child).await;
            Err(HarnessError::Timeout { command, timeout })
        }
        Err(e) => Err(HarnessError::Io(e)),
    }
}

/// `Ok(None)` si el proceso no terminó dentro de `timeout`.
async fn wait_with_deadline<F>(child: &mut Child,
                               pipes: F,
                               timeout: Duration,
                               pid: Option<u32>)
                               -> io::Result<Option<ExitStatus>>
    where F: Future<Output = io::Result<()>>
{
    tokio::pin!(pipes);
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    let mut drained = false;
    let mut status = None;
    while !drained || status.is_none() {
        tokio::select! {
            res = &mut pipes, if !drained => {
                res?;
                drained = true;
            }
            res = child.wait(), if status.is_none() => {
                status = Some(res?);
                deadline.as_mut().reset(Instant::now() + OUTPUT_GRACE);
            }
            () = &mut deadline => {
                if status.is_none() {
                    return Ok(None);
                }
                // un descendiente en segundo plano sigue reteniendo los pipes
                debug!("output still open {OUTPUT_GRACE:?} after exit, killing process group");
                kill_group(pid);
                break;
            }
        }
    }
    Ok(status)
}

fn spawn(cmd: &CommandSpec) -> io::Result<Child> {
    let mut std_cmd = std::process::Command::new(&cmd.program);
    std_cmd.args(&cmd.args)
           .stdin(Stdio::piped())
           .stdout(Stdio::piped())
           .stderr(Stdio::piped());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        std_cmd.process_group(0);
    }
    let mut proc = Command::from(std_cmd);
    proc.kill_on_drop(true);
    proc.spawn()
}

async fn feed_stdin(pipe: Option<ChildStdin>, input: Vec<u8>) -> io::Result<()> {
    let Some(mut pipe) = pipe else {
        return Ok(());
    };
    match pipe.write_all(&input).await {
        // El hijo puede terminar sin leer su entrada.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

async fn drain<R>(pipe: Option<R>, buf: &mut Vec<u8>) -> io::Result<()>
    where R: AsyncRead + Unpin
{
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(buf).await?;
    }
    Ok(())
}

fn kill_group(pid: Option<u32>) {
    #[cfg(unix)]
    {
        if let Some(pid) = pid {
            // SAFETY: killpg solo envía una señal; el grupo lo creó process_group(0).
            unsafe {
                libc::killpg(pid as libc::pid_t, libc::SIGKILL);
            }
        }
    }
    #[cfg(not(unix))]
    let _ = pid;
}

async fn terminate(child: &mut Child) {
    kill_group(child.id());
    if let Err(e) = child.kill().await {
        warn!("could not reap timed out child: {e}");
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(-1)
}

/// Fachada bloqueante sobre `run_bounded`.
///
/// Cada llamada crea su propio runtime de un hilo, de modo que puede usarse
/// desde hilos de rayon o de libtest. No debe llamarse desde dentro de un
/// runtime de tokio.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn run(&self, cmd: &CommandSpec, input: Option<&str>) -> Result<ProcessOutput, HarnessError> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all()
                                                                   .build()?;
        runtime.block_on(run_bounded(cmd, input.map(str::as_bytes), self.timeout))
    }
}
