use runflow_runtime::{errors::ExecResult, values::Value};

use super::args::Params;

/// Body of a native action
pub type ActionBody = fn(Params) -> ExecResult<Value>;

/// Description of a native action
pub struct Action {
    /// Name the calling engine binds the action under
    pub name: &'static str,

    /// Declared parameters, in call order
    pub params: Vec<ParamDecl>,

    /// Kind of the produced value
    pub ret_kind: &'static str,

    /// Callback of the action
    pub run: ActionBody,
}

/// Declaration of a single named parameter
pub struct ParamDecl {
    pub name: &'static str,
    pub is_optional: bool,
    pub kind: &'static str,
}

impl Action {
    /// Run the action on a set of named parameters
    pub fn call(&self, params: Params) -> ExecResult<Value> {
        (self.run)(params)
    }

    /// Render the action's signature,
    /// e.g. `replace(string: string, count?: any) -> string`
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|param| {
                let opt = if param.is_optional { "?" } else { "" };
                format!("{}{opt}: {}", param.name, param.kind)
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("{}({params}) -> {}", self.name, self.ret_kind)
    }
}

/// Define a native action
#[macro_export]
macro_rules! define_action {
    ($name: expr, ( $( $arg_name: ident : $arg_handler_type: ty = $arg_handler_gen: expr ),* ) -> $ret_type: ty) => {
        use runflow_runtime::{
            errors::{ExecError, ExecResult},
            values::Value,
        };

        #[allow(unused_imports)]
        use $crate::helpers::{args::*, fns::*, types::*};

        struct Args {
            $( $arg_name: <$arg_handler_type as ArgHandler>::Parsed ),*
        }

        fn _parse_args(#[allow(unused_mut)] mut params: Params) -> ExecResult<Args> {
            let parsed = Args {
                $( $arg_name: {
                    let arg_handler: $arg_handler_type = $arg_handler_gen;

                    let value = params.take(arg_handler.name());

                    arg_handler.parse(value)?
                } ),*
            };

            if params.is_empty() {
                Ok(parsed)
            } else {
                Err(ExecError::UnexpectedParameters {
                    parameters: params.into_names(),
                })
            }
        }

        fn _run(params: Params) -> ExecResult<Value> {
            let args = _parse_args(params)?;

            run().0(args)
        }

        struct Runner(Box<dyn Fn(Args) -> ExecResult<Value>>);

        impl Runner {
            fn new(inner: impl Fn(Args) -> ExecResult<Value> + 'static) -> Self {
                Self(Box::new(inner))
            }
        }

        pub fn build_action() -> Action {
            Action {
                name: $name,
                params: vec![
                    $({
                        let arg: $arg_handler_type = $arg_handler_gen;

                        ParamDecl {
                            name: arg.name(),
                            is_optional: arg.is_optional(),
                            kind: <<$arg_handler_type as ArgHandler>::Parser as TypedValueParser>::KIND_NAME,
                        }
                    }),*
                ],
                ret_kind: <$ret_type as TypedValueParser>::KIND_NAME,
                run: _run,
            }
        }
    };
}
